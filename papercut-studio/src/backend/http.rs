//! Reqwest implementation of the backend contract.

use super::{
    GenerateRequest, GenerateResponse, GenerationBackend, HealthResponse, RenderSceneRequest,
    RenderSceneResponse,
};
use crate::errors::TransportFailure;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP backend.
///
/// Every call carries a bounded wait; without one an unanswered request
/// would leave the pending indicator up forever. A timed-out call surfaces
/// as a [`TransportFailure`] and leaves the usual retry/reset paths open.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Bounded wait for `POST /api/generate`.
    pub generate_timeout: Duration,
    /// Bounded wait for `POST /api/render_scene`.
    pub render_scene_timeout: Duration,
    /// Bounded wait for `GET /api/health`.
    pub health_timeout: Duration,
    /// Bounded wait for the shutdown beacon dispatch.
    pub beacon_timeout: Duration,
}

impl BackendConfig {
    /// Creates a configuration for a base URL with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            generate_timeout: Duration::from_secs(300),
            render_scene_timeout: Duration::from_secs(120),
            health_timeout: Duration::from_secs(10),
            beacon_timeout: Duration::from_secs(2),
        }
    }

    /// Sets the generate timeout.
    #[must_use]
    pub fn with_generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = timeout;
        self
    }

    /// Sets the render-scene timeout.
    #[must_use]
    pub fn with_render_scene_timeout(mut self, timeout: Duration) -> Self {
        self.render_scene_timeout = timeout;
        self
    }

    /// Sets the health timeout.
    #[must_use]
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:5000")
    }
}

/// Production backend speaking the HTTP contract over reqwest.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: BackendConfig,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Creates a new HTTP backend.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, TransportFailure> {
        // The backend reports logical failures in the JSON body, sometimes
        // with a non-2xx status; the body is decoded regardless.
        let response = self
            .client
            .post(self.endpoint("/api/generate"))
            .timeout(self.config.generate_timeout)
            .form(request)
            .send()
            .await
            .map_err(|err| TransportFailure::new("generate", err.to_string()))?;

        response
            .json()
            .await
            .map_err(|err| TransportFailure::new("generate", err.to_string()))
    }

    async fn render_scene(
        &self,
        request: &RenderSceneRequest,
    ) -> Result<RenderSceneResponse, TransportFailure> {
        let response = self
            .client
            .post(self.endpoint("/api/render_scene"))
            .timeout(self.config.render_scene_timeout)
            .json(request)
            .send()
            .await
            .map_err(|err| TransportFailure::new("render_scene", err.to_string()))?;

        response
            .json()
            .await
            .map_err(|err| TransportFailure::new("render_scene", err.to_string()))
    }

    async fn health(&self) -> Result<HealthResponse, TransportFailure> {
        let response = self
            .client
            .get(self.endpoint("/api/health"))
            .timeout(self.config.health_timeout)
            .send()
            .await
            .map_err(|err| TransportFailure::new("health", err.to_string()))?;

        response
            .json()
            .await
            .map_err(|err| TransportFailure::new("health", err.to_string()))
    }

    fn send_shutdown_beacon(&self) {
        let client = self.client.clone();
        let url = self.endpoint("/api/shutdown");
        let timeout = self.config.beacon_timeout;

        // Spawned and never awaited: the page may terminate immediately
        // after the unload handler returns.
        tokio::spawn(async move {
            if let Err(err) = dispatch_beacon(client, url, timeout).await {
                debug!(error = %err, "shutdown beacon not delivered");
            }
        });
    }
}

async fn dispatch_beacon(
    client: reqwest::Client,
    url: String,
    timeout: Duration,
) -> anyhow::Result<()> {
    client.post(url).timeout(timeout).send().await?;
    Ok(())
}
