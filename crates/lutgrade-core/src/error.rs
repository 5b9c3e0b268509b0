//! Error types for pixel buffer construction.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised when a [`crate::PixelBuffer`] would violate its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Only RGB (3) and RGBA (4) buffers are supported.
    #[error("unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(u32),

    /// Sample storage does not match `width * height * channels`.
    #[error("data length mismatch: expected {expected} samples, got {actual}")]
    DataLength {
        /// Samples required by the dimensions.
        expected: usize,
        /// Samples actually supplied.
        actual: usize,
    },
}
