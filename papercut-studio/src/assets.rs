//! Asset loading: render confirmation and download bytes.
//!
//! An HTTP-complete generation response only proves the backend produced a
//! reference; [`AssetLoader`] is how the core confirms the asset itself
//! resolves (the load-confirmation sub-step) and how downloads are
//! materialized into bytes.

use crate::errors::AssetLoadFailure;
use async_trait::async_trait;
use std::time::Duration;

/// Resolves asset references into bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Fetches the asset at `url`, resolving server-relative references.
    ///
    /// An empty body counts as a failed load: the reference resolved but the
    /// image cannot render from it.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetLoadFailure>;
}

/// HTTP asset loader.
///
/// Artifact references from the backend are server-relative (`/output/...`),
/// so the loader carries the backend base URL to resolve them.
#[derive(Debug, Clone)]
pub struct HttpAssetLoader {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpAssetLoader {
    /// Creates an asset loader resolving against a backend base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(60),
            client: reqwest::Client::new(),
        }
    }

    /// Sets the bounded wait for a single fetch.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{}", self.base_url.trim_end_matches('/'), url)
        } else {
            url.to_string()
        }
    }
}

#[async_trait]
impl AssetLoader for HttpAssetLoader {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetLoadFailure> {
        let resolved = self.resolve(url);

        let response = self
            .client
            .get(&resolved)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| AssetLoadFailure::new(url, err.to_string()))?
            .error_for_status()
            .map_err(|err| AssetLoadFailure::new(url, err.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|err| AssetLoadFailure::new(url, err.to_string()))?;

        if bytes.is_empty() {
            return Err(AssetLoadFailure::new(url, "empty asset body"));
        }

        Ok(bytes.to_vec())
    }
}
