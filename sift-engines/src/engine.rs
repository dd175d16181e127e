//! Trait definition for pluggable search-provider adapters.
//!
//! Each provider implements [`Engine`] to turn [`SearchOptions`] into a
//! query URL and the provider's raw response into a [`ResultSet`]. The host
//! performs the HTTP fetch between the two calls.

use crate::error::SearchError;
use crate::types::{Category, ResultSet, SearchOptions};
use uuid::Uuid;

/// Per-search context threaded through both engine calls.
///
/// Only used to correlate tracing events; engines never block on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    /// Identifier shared by every event of one search.
    pub request_id: Uuid,
}

impl SearchContext {
    /// Creates a context with a fresh random request id.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
        }
    }

    /// Span for one engine call within this search.
    pub fn span(&self, engine: &'static str, phase: &'static str) -> tracing::Span {
        tracing::debug_span!("engine", request_id = %self.request_id, engine, phase)
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A pluggable search-provider adapter.
///
/// Implementors are immutable after construction and must be `Send + Sync`:
/// the host may call [`Engine::request`] and [`Engine::response`] for many
/// searches at once from any number of threads.
pub trait Engine: Send + Sync {
    /// Stable name used as registry key and stamped on every result.
    fn name(&self) -> &'static str;

    /// Categories this engine is listed under.
    fn categories(&self) -> &'static [Category];

    /// Compose the provider query URL for `opts`.
    ///
    /// Writes the URL into [`SearchOptions::url`] and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the engine cannot express the request.
    fn request(&self, ctx: &SearchContext, opts: &mut SearchOptions) -> Result<String, SearchError>;

    /// Parse the provider's raw response body for the search in `opts`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] only when the document as a whole cannot be
    /// understood. Individual malformed results are skipped.
    fn response(
        &self,
        ctx: &SearchContext,
        opts: &SearchOptions,
        body: &[u8],
    ) -> Result<ResultSet, SearchError>;
}
