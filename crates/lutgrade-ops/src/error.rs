//! Error types for filter operations.

use lutgrade_lut::SamplerError;
use thiserror::Error;

/// Error type for filter operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The LUT cannot be sampled.
    #[error(transparent)]
    InvalidLut(#[from] SamplerError),

    /// Raw sample data does not form whole pixels.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
