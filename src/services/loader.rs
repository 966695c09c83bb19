use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading a data feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to load {path}: HTTP {status}")]
    Load { path: String, status: u16 },

    #[error("Failed to load {path}: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected document shape: {0}")]
    Shape(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Fetches JSON feeds published next to the dashboard
///
/// Paths are resolved against a base URL, so the relative paths used by the
/// static site (`./data/scores.json`) work unchanged. One GET per call,
/// no retries and no caching.
pub struct FeedLoader {
    base_url: Url,
    client: Client,
}

impl FeedLoader {
    /// Create a new loader; `timeout` of `None` keeps the client default
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FeedError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a feed path against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url, FeedError> {
        self.base_url
            .join(path)
            .map_err(|e| FeedError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// GET `path` and parse the body as JSON, whatever its content type
    pub async fn load(&self, path: &str) -> Result<Value, FeedError> {
        let url = self.resolve(path)?;

        tracing::debug!("Fetching feed from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FeedError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feed {} returned {}", path, status);
            return Err(FeedError::Load {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FeedError::Request {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| FeedError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Load `path` and convert it into a typed document
    pub async fn load_document<T>(&self, path: &str) -> Result<T, FeedError>
    where
        T: DeserializeOwned,
    {
        let value = self.load(path).await?;

        serde_json::from_value(value)
            .map_err(|e| FeedError::Shape(format!("{}: {}", path, e)))
    }
}

/// A base without a trailing slash would have its last segment replaced on join
fn parse_base_url(raw: &str) -> Result<Url, FeedError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    Url::parse(&normalized).map_err(|e| FeedError::InvalidUrl(format!("{}: {}", raw, e)))
}
