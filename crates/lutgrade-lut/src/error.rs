//! LUT error types.

use thiserror::Error;

/// Result type for `.cube` parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for sampling and table construction.
pub type SampleResult<T> = Result<T, SamplerError>;

/// Errors that can occur while reading a `.cube` file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No `LUT_3D_SIZE` directive before the first data row, or none at all.
    #[error("missing LUT_3D_SIZE directive before sample data")]
    MissingSize,

    /// The size directive has no value, a non-integer value, or a value
    /// outside the supported range.
    #[error("line {line}: invalid LUT_3D_SIZE value '{value}'")]
    InvalidSize {
        /// 1-based line number.
        line: usize,
        /// Offending token (empty when missing).
        value: String,
    },

    /// Number of data rows differs from `size^3`.
    #[error("expected {expected} samples, found {found}")]
    SampleCountMismatch {
        /// `size^3`.
        expected: usize,
        /// Rows actually read.
        found: usize,
    },

    /// A data or domain row does not hold exactly three finite numbers.
    #[error("line {line}: malformed row '{content}'")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// `DOMAIN_MIN` is not below `DOMAIN_MAX` on some channel.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Valid `.cube` content this crate does not handle (1D tables).
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Errors raised when a table cannot be sampled.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplerError {
    /// The table is structurally inconsistent.
    #[error("invalid LUT: {0}")]
    InvalidLut(String),
}
