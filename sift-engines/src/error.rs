//! Error types for the sift-engines crate.
//!
//! Only whole-document failures are errors. Per-item defects in a provider
//! response are absorbed by the parsers and never surface here.

/// Errors that can occur while building requests or parsing responses.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The response matched none of the envelope shapes the engine knows.
    #[error("document shape not recognized: {0}")]
    UnrecognizedShape(String),

    /// The response bytes could not be decoded as text.
    #[error("decode error: {0}")]
    Decode(String),

    /// Internal parse failure, e.g. a selector that does not compile.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid engine configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for sift-engines results.
pub type Result<T> = std::result::Result<T, SearchError>;
