//! # sift-engines
//!
//! Search-provider adapters for sift.
//!
//! Each adapter turns a normalised [`SearchOptions`] into the provider's
//! query URL and turns the provider's raw response into a [`ResultSet`].
//! Fetching the URL is left to the host, so this crate performs no I/O.
//!
//! ## Design
//!
//! - Adapters implement [`Engine`] and are immutable, `Send + Sync` values
//! - HTML responses are parsed with CSS selectors via `scraper`
//! - Malformed result blocks are skipped; only an unrecognisable document
//!   is an error
//! - An explicit [`EngineRegistry`] maps names and categories to adapters,
//!   with an optional write-once process-wide instance
//!
//! ## Example
//!
//! ```
//! use sift_engines::{Engine, SearchContext, SearchOptions, TimeRange};
//! use sift_engines::engines::BingVideosEngine;
//!
//! let engine = BingVideosEngine::new();
//! let ctx = SearchContext::new();
//! let mut opts = SearchOptions::new("rust ownership", 2).with_time_range(TimeRange::Week);
//! let url = engine.request(&ctx, &mut opts)?;
//! assert!(url.contains("first=10"));
//!
//! // The host fetches `url`; here we feed a canned body instead.
//! let body = br#"<div class="dg_u"><div id="mc_vtvc_video_1">
//!   <div class="vrhdata" vrhm='{"du":"5:00","vt":"Ownership","murl":"https://example.com/v"}'></div>
//! </div></div>"#;
//! let results = engine.response(&ctx, &opts, body)?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), sift_engines::SearchError>(())
//! ```

pub mod engine;
pub mod engines;
pub mod error;
pub mod registry;
pub mod types;

pub use engine::{Engine, SearchContext};
pub use error::{Result, SearchError};
pub use registry::{default_registry, register_default_engines, EngineRegistry};
pub use types::{Category, ResultItem, ResultSet, SearchOptions, TimeRange};
