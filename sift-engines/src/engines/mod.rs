//! Search-provider adapter implementations.
//!
//! Each module provides a struct implementing [`crate::engine::Engine`] for
//! one provider's query URL format and response markup.

pub mod bing_videos;

pub use bing_videos::BingVideosEngine;

/// Names of every adapter this crate ships.
pub const KNOWN_ENGINES: &[&str] = &[bing_videos::ENGINE_NAME];

/// Returns `true` if `name` is one of [`KNOWN_ENGINES`].
pub fn is_known(name: &str) -> bool {
    KNOWN_ENGINES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bing_videos_is_known() {
        assert!(is_known("bing_videos"));
        assert!(!is_known("altavista"));
    }
}
