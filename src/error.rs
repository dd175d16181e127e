//! Error types for the sift host.

use sift_engines::SearchError;

/// Top-level error type for the host.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An adapter failed to build a request or parse a response.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// Result or config encoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Logging could not be initialised.
    #[error("logging error: {0}")]
    Logging(String),
}

/// Convenience type alias for host results.
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_errors_convert() {
        let err: SiftError = SearchError::UnrecognizedShape("bing_videos".into()).into();
        assert_eq!(
            err.to_string(),
            "search error: document shape not recognized: bing_videos"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.html");
        let err: SiftError = io.into();
        assert!(matches!(err, SiftError::Io(_)));
        assert!(err.to_string().contains("missing.html"));
    }

    #[test]
    fn display_config() {
        let err = SiftError::Config("unknown engine: altavista".into());
        assert_eq!(err.to_string(), "config error: unknown engine: altavista");
    }
}
