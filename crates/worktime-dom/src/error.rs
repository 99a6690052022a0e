use thiserror::Error;

/// Errors surfaced by the strict provider. The lenient provider
/// recovers from the same conditions instead of reporting them.
#[derive(Debug, Error)]
pub enum DomError {
    /// The markup is not well formed.
    #[error("malformed markup at byte {position}: {source}")]
    Malformed {
        position: u64,
        source: quick_xml::Error,
    },
    /// An attribute inside a start tag could not be parsed.
    #[error("bad attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        source: quick_xml::events::attributes::AttrError,
    },
}

/// Convenience alias for parsing operations.
pub type Result<T> = std::result::Result<T, DomError>;
