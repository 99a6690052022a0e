use thiserror::Error;

/// Errors that can occur while serializing the grid.
#[derive(Debug, Error)]
pub enum OutputError {
    /// CSV assembly failed.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    /// The serializer's buffer could not be recovered.
    #[error("csv writer buffer: {0}")]
    Buffer(String),
    /// Serialized bytes were not valid UTF-8.
    #[error("csv output was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for serialization operations.
pub type Result<T> = std::result::Result<T, OutputError>;
