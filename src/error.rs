//! Defines [`GeoBandError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoBandError {
    /// An encoded band that could not be decoded.
    ///
    /// Covers bad base64, corrupt or oversized compressed data, unknown magic numbers,
    /// unsupported versions, non-positive counts and truncated layouts.
    #[error("Malformed band input: {0}")]
    MalformedInput(String),

    /// A geometry that cannot be represented in the band layout.
    #[error("Invalid band geometry: {0}")]
    InvalidGeometry(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoBandError>;

impl GeoBandError {
    /// Whether this error was raised while decoding an encoded band.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, GeoBandError::MalformedInput(_))
    }
}
