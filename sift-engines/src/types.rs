//! Core types for search requests, result records and engine categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recency filter applied to a search.
///
/// Parsed from the exact tokens `day`, `week`, `month` and `year`. Anything
/// else, including the empty string or a differently cased token, means no
/// restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// No recency restriction.
    #[default]
    Any,
    /// Published within the last day.
    Day,
    /// Published within the last week.
    Week,
    /// Published within the last month.
    Month,
    /// Published within the last year.
    Year,
}

impl TimeRange {
    /// Parse a time-range token. Unknown tokens map to [`TimeRange::Any`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "day" => Self::Day,
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            "" => Self::Any,
            other => {
                tracing::debug!(token = other, "unknown time range, searching without filter");
                Self::Any
            }
        }
    }

    /// Returns the canonical token, or `""` for [`TimeRange::Any`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request input to an engine.
///
/// The caller owns it for the duration of one search. Engines only write
/// [`SearchOptions::url`] when building the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Raw query text as typed by the user.
    pub query: String,
    /// 1-based page number.
    pub page_no: u32,
    /// Recency filter.
    pub time_range: TimeRange,
    /// Provider URL composed by [`crate::Engine::request`].
    pub url: Option<String>,
}

impl SearchOptions {
    /// Options for the given query and 1-based page, without a time filter.
    pub fn new(query: impl Into<String>, page_no: u32) -> Self {
        Self {
            query: query.into(),
            page_no,
            time_range: TimeRange::Any,
            url: None,
        }
    }

    /// Sets the recency filter.
    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    /// Zero-based offset of the first result on this page for `page_size`.
    ///
    /// Page 0 is treated as page 1.
    pub fn offset(&self, page_size: u32) -> u32 {
        self.page_no.saturating_sub(1).saturating_mul(page_size)
    }
}

/// A single result record produced by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Name of the engine that produced the record.
    pub engine: String,
    /// Result title. Never empty.
    pub title: String,
    /// Canonical URL of the result. Always an absolute URL.
    pub url: String,
    /// Thumbnail image URL, when the provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Short text describing the result.
    pub content: String,
    /// Query text the result was returned for.
    pub query: String,
}

/// Ordered results of parsing one provider response.
///
/// Order is the provider's own ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Name of the engine that produced the set.
    pub engine: String,
    /// Page number the set corresponds to.
    pub page_no: u32,
    /// Result records in document order.
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    /// Creates an empty set for `engine` and `page_no`.
    pub fn new(engine: impl Into<String>, page_no: u32) -> Self {
        Self {
            engine: engine.into(),
            page_no,
            items: Vec::new(),
        }
    }

    /// Appends a record.
    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if every block was skipped or none were present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate records in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultItem> {
        self.items.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultItem;
    type IntoIter = std::slice::Iter<'a, ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Topical bucket an engine can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General-purpose web search.
    General,
    /// Video search.
    Video,
}

impl Category {
    /// Returns the lowercase category name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Video => "video",
        }
    }

    /// Returns all category variants.
    pub fn all() -> &'static [Category] {
        &[Self::General, Self::Video]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
