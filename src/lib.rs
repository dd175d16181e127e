//! # sift
//!
//! Host glue around the [`sift_engines`] search-provider adapters.
//!
//! Loads [`SiftConfig`] from TOML, builds the [`sift_engines::EngineRegistry`]
//! of enabled adapters, and sets up tracing. The `sift-probe` binary uses
//! these pieces to print query URLs and to parse saved provider responses
//! without touching the network.

pub mod config;
pub mod error;
pub mod host;
pub mod logging;

pub use config::SiftConfig;
pub use error::{Result, SiftError};
pub use sift_engines;
