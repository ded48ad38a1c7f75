/// Error types for slidesmith operations.
use thiserror::Error;

/// Result type for slidesmith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside of slide assembly.
///
/// Assembly itself never fails; these cover the steps around it: parsing the
/// content payload, fetching it from a content source, and reading or writing
/// `.pptx` packages.
#[derive(Error, Debug)]
pub enum Error {
    /// Payload is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload parsed but has the wrong top-level shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Part missing from a package being read
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Content source failed to produce a payload
    #[error("Content source error: {0}")]
    Source(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
