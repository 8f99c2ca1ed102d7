//! Shortboxed service for comics catalog queries
//!
//! This module handles communication with the Shortboxed REST API. One
//! query per skill request, no retries: every failure collapses to a
//! canned spoken sentence at the handler.

use crate::schemas::shortboxed::{Comic, ComicQuery, QueryResponse};
use crate::utils::truncate_str;
use reqwest::Client;
use thiserror::Error;

const SHORTBOXED_API_BASE: &str = "https://api.shortboxed.com/comics/v1";

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when querying the Shortboxed API
#[derive(Error, Debug)]
pub enum ShortboxedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The API answered with its own `error` field (e.g. nothing matched)
    #[error("API error: {0}")]
    Api(String),

    /// The body decoded but carried no `comics` array
    #[error("Response carried no comics")]
    MissingComics,
}

impl ShortboxedError {
    /// Whether the API itself rejected the query (title not found etc.),
    /// as opposed to a transport or decoding failure.
    pub fn is_api_rejection(&self) -> bool {
        matches!(self, ShortboxedError::Api(_))
    }
}

// ============================================================================
// Shortboxed Service
// ============================================================================

/// Configuration for the Shortboxed service
#[derive(Debug, Clone)]
pub struct ShortboxedConfig {
    /// Base URL override (default: api.shortboxed.com)
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ShortboxedConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: 10,
        }
    }
}

impl ShortboxedConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// Service for querying the Shortboxed comics catalog
#[derive(Debug, Clone)]
pub struct ShortboxedService {
    client: Client,
    base_url: Option<String>,
}

impl ShortboxedService {
    /// Create a new Shortboxed service
    pub fn new(config: ShortboxedConfig) -> Result<Self, ShortboxedError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(SHORTBOXED_API_BASE)
    }

    /// Run one catalog query and return the comics it matched.
    ///
    /// An `error` field in the body becomes [`ShortboxedError::Api`]; a body
    /// with neither `error` nor `comics` becomes
    /// [`ShortboxedError::MissingComics`].
    pub async fn query(&self, query: &ComicQuery) -> Result<Vec<Comic>, ShortboxedError> {
        let url = format!("{}/query", self.base_url());
        let pairs = query.as_query_pairs();

        tracing::debug!(
            url = %url,
            params = ?pairs,
            "Querying Shortboxed"
        );

        let response = self.client.get(&url).query(&pairs).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Shortboxed returned non-success status");
            return Err(ShortboxedError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        let decoded: QueryResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, body = %truncate_str(&body, 200), "Failed to decode Shortboxed response");
            ShortboxedError::Decode(e.to_string())
        })?;

        if let Some(error) = decoded.error {
            tracing::debug!(error = %error, "Shortboxed reported an error");
            return Err(ShortboxedError::Api(error));
        }

        decoded.comics.ok_or(ShortboxedError::MissingComics)
    }

    /// Check if the service is usable (client constructed)
    pub fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let service = ShortboxedService::new(ShortboxedConfig::default()).unwrap();
        assert_eq!(service.base_url(), "https://api.shortboxed.com/comics/v1");
    }

    #[test]
    fn test_base_url_override() {
        let config = ShortboxedConfig::default().with_base_url("http://localhost:9000/v1");
        let service = ShortboxedService::new(config).unwrap();
        assert_eq!(service.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn test_api_rejection_classification() {
        assert!(ShortboxedError::Api("no results".into()).is_api_rejection());
        assert!(!ShortboxedError::MissingComics.is_api_rejection());
        assert!(!ShortboxedError::Status(502).is_api_rejection());
    }
}
