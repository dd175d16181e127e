//! Bing Videos — video results from Bing's async content endpoint.
//!
//! The endpoint answers with an HTML fragment in one of two envelopes: the
//! standard `dg_u` grid, or the `mc_fgvc_u` layout Bing sometimes serves for
//! the first page. Each result block carries its title and media URL as a
//! JSON object inside the `vrhm` attribute of a `div.vrhdata` element.

use crate::engine::{Engine, SearchContext};
use crate::error::SearchError;
use crate::types::{Category, ResultItem, ResultSet, SearchOptions, TimeRange};
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use std::borrow::Cow;
use url::Url;

/// Registry key and result tag for this engine.
pub const ENGINE_NAME: &str = "bing_videos";

/// Default async content endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.bing.com/videos/asyncv2";

/// Results requested per page.
pub const PAGE_SIZE: u32 = 10;

const CATEGORIES: &[Category] = &[Category::General, Category::Video];

const STANDARD_MARKER: &str = r#"<div class="dg_u""#;
const FIRST_PAGE_MARKER: &str = r#"<div class="mc_fgvc_u"#;

/// Bing Videos adapter.
///
/// Holds only its endpoint, so one instance can serve any number of
/// concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingVideosEngine {
    base_url: String,
}

impl BingVideosEngine {
    /// Adapter for the public Bing endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Adapter for a custom endpoint, e.g. a regional mirror or a test server.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] unless `base_url` is an absolute
    /// `http`/`https` URL without a query string.
    pub fn with_base_url(base_url: &str) -> Result<Self, SearchError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| SearchError::Config(format!("invalid bing_videos base_url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearchError::Config(format!(
                "bing_videos base_url must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(SearchError::Config(
                "bing_videos base_url must not carry a query or fragment".into(),
            ));
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Endpoint the query URLs are built on.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for BingVideosEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for BingVideosEngine {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn categories(&self) -> &'static [Category] {
        CATEGORIES
    }

    fn request(&self, ctx: &SearchContext, opts: &mut SearchOptions) -> Result<String, SearchError> {
        let _span = ctx.span(ENGINE_NAME, "request").entered();

        let url = build_query_url(&self.base_url, opts);
        tracing::trace!(url = %url, "bing_videos request");

        opts.url = Some(url.clone());
        Ok(url)
    }

    fn response(
        &self,
        ctx: &SearchContext,
        opts: &SearchOptions,
        body: &[u8],
    ) -> Result<ResultSet, SearchError> {
        let _span = ctx.span(ENGINE_NAME, "response").entered();
        tracing::trace!(bytes = body.len(), "bing_videos response received");

        parse_bing_videos_html(body, opts)
    }
}

/// Recency in minutes for Bing's `videoage` filter.
pub fn video_age_minutes(range: TimeRange) -> Option<u32> {
    match range {
        TimeRange::Day => Some(60 * 24),
        TimeRange::Week => Some(60 * 24 * 7),
        TimeRange::Month => Some(60 * 24 * 31),
        TimeRange::Year => Some(60 * 24 * 365),
        TimeRange::Any => None,
    }
}

/// Compose the async content URL for `opts` on `base_url`.
///
/// Example: `https://www.bing.com/videos/asyncv2?q=test&async=content&first=0&count=10`
pub fn build_query_url(base_url: &str, opts: &SearchOptions) -> String {
    let first = opts.offset(PAGE_SIZE).to_string();
    let count = PAGE_SIZE.to_string();

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("q", &opts.query)
        .append_pair("async", "content")
        .append_pair("first", &first)
        .append_pair("count", &count);

    // One day: `&form=VRFLTR&qft=+filterui:videoage-lt1440`
    if let Some(minutes) = video_age_minutes(opts.time_range) {
        query
            .append_pair("form", "VRFLTR")
            .append_pair("qft", &format!(" filterui:videoage-lt{minutes}"));
    }

    format!("{base_url}?{}", query.finish())
}

/// Which of Bing's two layouts a response uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Envelope {
    /// `<div class="dg_u">` grid of `mc_vtvc_video*` blocks.
    Standard,
    /// First-page layout rooted at `<div class="mc_fgvc_u...">`.
    FirstPage,
}

impl Envelope {
    /// Cut the result fragment out of `body`, preferring the standard layout.
    fn isolate(body: &str) -> Option<(Self, &str)> {
        if let Some(start) = body.find(STANDARD_MARKER) {
            return Some((Self::Standard, &body[start..]));
        }
        body.find(FIRST_PAGE_MARKER)
            .map(|start| (Self::FirstPage, &body[start..]))
    }

    fn item_selector(self) -> &'static str {
        match self {
            Self::Standard => r#"div[class="dg_u"] div[id^="mc_vtvc_video"]"#,
            Self::FirstPage => r#"div[id^="mc_vtvc__"]"#,
        }
    }
}

struct ItemSelectors {
    item: Selector,
    metadata: Selector,
    meta_text: Selector,
    thumbnail: Selector,
}

impl ItemSelectors {
    fn new(envelope: Envelope) -> Result<Self, SearchError> {
        Ok(Self {
            item: selector(envelope.item_selector(), "item")?,
            metadata: selector("div.vrhdata", "metadata")?,
            meta_text: selector("div.mc_vtvc_meta_block span", "meta text")?,
            thumbnail: selector("div.mc_vtvc_th img", "thumbnail")?,
        })
    }
}

fn selector(css: &str, what: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("invalid {what} selector: {e:?}")))
}

/// Per-result JSON carried in the `vrhm` attribute.
#[derive(Debug, Deserialize)]
struct VideoMetadata {
    /// Usually `"m:ss"`, but left untyped so an odd value never drops the block.
    #[serde(rename = "du")]
    duration: Option<serde_json::Value>,
    #[serde(rename = "vt")]
    title: Option<String>,
    #[serde(rename = "murl")]
    url: Option<String>,
}

impl VideoMetadata {
    fn duration_text(&self) -> Option<String> {
        match self.duration.as_ref()? {
            serde_json::Value::String(du) => Some(du.clone()),
            serde_json::Value::Number(du) => Some(du.to_string()),
            _ => None,
        }
    }
}

/// Leading bytes of gzip and zstd streams.
const COMPRESSED_MAGIC: &[&[u8]] = &[&[0x1f, 0x8b], &[0x28, 0xb5, 0x2f, 0xfd]];

/// Decode a response body as text, replacing invalid UTF-8 sequences.
///
/// A body that is still a compressed stream cannot be markup at all.
fn decode_body(body: &[u8]) -> Result<Cow<'_, str>, SearchError> {
    if COMPRESSED_MAGIC.iter().any(|magic| body.starts_with(magic)) {
        return Err(SearchError::Decode(
            "bing_videos response is still compressed".into(),
        ));
    }
    Ok(String::from_utf8_lossy(body))
}

/// Parse a Bing Videos response body into results for `opts`.
///
/// Blocks with missing or malformed metadata, or without a title and a
/// valid URL, are skipped rather than failing the whole page.
///
/// # Errors
///
/// - [`SearchError::Decode`] if `body` is a compressed stream rather than text.
/// - [`SearchError::UnrecognizedShape`] if neither layout is present.
pub fn parse_bing_videos_html(body: &[u8], opts: &SearchOptions) -> Result<ResultSet, SearchError> {
    let body = decode_body(body)?;

    let (envelope, fragment) = Envelope::isolate(&body).ok_or_else(|| {
        SearchError::UnrecognizedShape("no bing_videos result container found".into())
    })?;
    tracing::debug!(?envelope, bytes = fragment.len(), "bing_videos envelope matched");

    let selectors = ItemSelectors::new(envelope)?;
    let document = Html::parse_document(fragment);

    let mut results = ResultSet::new(ENGINE_NAME, opts.page_no);
    for (index, block) in document.select(&selectors.item).enumerate() {
        match extract_item(block, &selectors, &opts.query) {
            Ok(item) => results.push(item),
            Err(reason) => tracing::trace!(index, reason, "bing_videos item skipped"),
        }
    }

    tracing::debug!(count = results.len(), "bing_videos results parsed");
    Ok(results)
}

/// Build one result from an item block, or say why it was skipped.
fn extract_item(
    block: ElementRef<'_>,
    selectors: &ItemSelectors,
    query: &str,
) -> Result<ResultItem, &'static str> {
    let raw = block
        .select(&selectors.metadata)
        .next()
        .and_then(|el| el.value().attr("vrhm"))
        .ok_or("missing vrhm metadata")?;

    // A wrong-typed `vt` or `murl` fails here too and skips the block.
    let metadata: VideoMetadata =
        serde_json::from_str(raw).map_err(|_| "malformed vrhm metadata")?;

    let title = non_empty(metadata.title.as_deref()).ok_or("missing title")?;
    let url = non_empty(metadata.url.as_deref()).ok_or("missing url")?;
    Url::parse(url).map_err(|_| "invalid url")?;

    let info = meta_text(block, &selectors.meta_text);
    let duration = metadata.duration_text();
    let content = snippet(duration.as_deref(), &info);

    Ok(ResultItem {
        engine: ENGINE_NAME.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        thumbnail: thumbnail(block, &selectors.thumbnail),
        content,
        query: query.to_string(),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Whitespace-normalised text of the meta block spans, joined by spaces.
fn meta_text(block: ElementRef<'_>, sel: &Selector) -> String {
    block
        .select(sel)
        .map(|span| span.text().collect::<Vec<_>>().join(" "))
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"<duration> - <info>"`, degrading to whichever half is present.
fn snippet(duration: Option<&str>, info: &str) -> String {
    match (non_empty(duration), info.is_empty()) {
        (Some(du), false) => format!("{du} - {info}"),
        (Some(du), true) => du.to_string(),
        (None, _) => info.to_string(),
    }
}

/// Thumbnail source, skipping inline `data:` placeholders for lazy-loaded images.
fn thumbnail(block: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let img = block.select(sel).next()?;
    ["src", "data-src-hq", "data-src"]
        .iter()
        .filter_map(|attr| img.value().attr(attr))
        .map(str::trim)
        .find(|src| !src.is_empty() && !src.starts_with("data:"))
        .map(str::to_string)
}
