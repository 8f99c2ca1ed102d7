//! Shortboxed comics API schema definitions
//!
//! Models for `GET /comics/v1/query` on api.shortboxed.com. The response
//! body carries either an `error` string or a `comics` array; both can be
//! absent, and a body without `comics` is treated as an upstream failure.

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters accepted by the Shortboxed query endpoint.
///
/// Publisher and title hold catalog spellings (ampersands, not the spoken
/// "and"); see [`crate::speech::spoken_to_catalog`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComicQuery {
    pub publisher: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl ComicQuery {
    /// Render the populated fields as query pairs for the upstream request.
    pub fn as_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(publisher) = &self.publisher {
            pairs.push(("publisher", publisher.clone()));
        }
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(date) = self.release_date {
            pairs.push(("release_date", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Response body of the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Error reported by the API itself (e.g. nothing matched the query)
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub comics: Option<Vec<Comic>>,
}

/// A single comic entry. Only `title` is required for speech output; the
/// remaining catalog fields are kept for logging and future filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct Comic {
    pub title: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creators: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub diamond_id: Option<String>,
}
