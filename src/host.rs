//! Registry bootstrap and engine dispatch for the host.
//!
//! The host owns the HTTP transport. These helpers only resolve an engine by
//! name and hand it the request options or the fetched body.

use crate::config::SiftConfig;
use crate::error::{Result, SiftError};
use sift_engines::engines::{bing_videos, BingVideosEngine};
use sift_engines::registry;
use sift_engines::{Engine, EngineRegistry, ResultSet, SearchContext, SearchOptions};
use std::sync::Arc;

/// Build a registry holding every engine enabled in `config`.
///
/// # Errors
///
/// Returns [`SiftError::Config`] if the configuration does not validate.
pub fn build_registry(config: &SiftConfig) -> Result<EngineRegistry> {
    config.validate()?;

    let mut registry = EngineRegistry::new();
    for name in &config.engines.enabled {
        registry.register_engine(instantiate(name, config)?);
    }

    tracing::info!(engines = registry.len(), "engine registry ready");
    Ok(registry)
}

/// Construct the engine called `name` with its settings from `config`.
fn instantiate(name: &str, config: &SiftConfig) -> Result<Arc<dyn Engine>> {
    match name {
        bing_videos::ENGINE_NAME => {
            let engine = BingVideosEngine::with_base_url(&config.engines.bing_videos.base_url)
                .map_err(|e| SiftError::Config(e.to_string()))?;
            Ok(Arc::new(engine))
        }
        other => Err(SiftError::Config(format!("unknown engine: {other}"))),
    }
}

/// Build the registry for `config` and publish it process-wide.
///
/// # Errors
///
/// Returns [`SiftError::Config`] if the configuration is invalid or a
/// global registry was already installed.
pub fn install_registry(config: &SiftConfig) -> Result<&'static EngineRegistry> {
    let built = build_registry(config)?;
    registry::install_global(built)
        .map_err(|_| SiftError::Config("engine registry already installed".into()))
}

/// Look up `name` in `registry`.
///
/// # Errors
///
/// Returns [`SiftError::Config`] if no engine is registered under `name`.
pub fn engine<'a>(registry: &'a EngineRegistry, name: &str) -> Result<&'a Arc<dyn Engine>> {
    registry
        .get(name)
        .ok_or_else(|| SiftError::Config(format!("engine not registered: {name}")))
}

/// Ask engine `name` for the URL to fetch for `opts`.
///
/// # Errors
///
/// Returns an error if the engine is unknown or cannot express the request.
pub fn prepare_request(
    registry: &EngineRegistry,
    name: &str,
    ctx: &SearchContext,
    opts: &mut SearchOptions,
) -> Result<String> {
    let url = engine(registry, name)?.request(ctx, opts)?;
    Ok(url)
}

/// Hand a fetched response body to engine `name`.
///
/// # Errors
///
/// Returns an error if the engine is unknown or rejects the document.
pub fn parse_response(
    registry: &EngineRegistry,
    name: &str,
    ctx: &SearchContext,
    opts: &SearchOptions,
    body: &[u8],
) -> Result<ResultSet> {
    let results = engine(registry, name)?.response(ctx, opts, body)?;
    tracing::debug!(engine = name, count = results.len(), "response parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_base_url_is_a_config_error() {
        let mut config = SiftConfig::default();
        config.engines.bing_videos.base_url = "ftp://bing.com/videos".into();

        let err = instantiate("bing_videos", &config).err().expect("rejected");
        assert!(matches!(err, SiftError::Config(_)), "got {err:?}");
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn unknown_engine_is_a_config_error() {
        let err = instantiate("altavista", &SiftConfig::default())
            .err()
            .expect("rejected");
        assert!(matches!(err, SiftError::Config(_)));
    }

    #[test]
    fn instantiate_uses_configured_name() {
        let engine = instantiate("bing_videos", &SiftConfig::default()).expect("engine");
        assert_eq!(engine.name(), "bing_videos");
    }
}
