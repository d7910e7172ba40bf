//! Unified error type for deck generation.
use thiserror::Error;

/// Result type for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for deckforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape or text frame with a non-positive extent
    #[error("invalid geometry: {width}x{height} EMU (extents must be positive)")]
    InvalidGeometry { width: i64, height: i64 },

    /// Malformed color value
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Malformed package part name
    #[error("invalid part name: {0}")]
    InvalidPackUri(String),

    /// Part not found in the package
    #[error("part not found: {0}")]
    PartNotFound(String),

    /// XML emission error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}
