//! The backend health probe.
//!
//! One-shot and purely observational: the report goes to the log and to the
//! caller, and never gates a workflow transition.

use crate::backend::{GenerationBackend, HealthResponse};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One-shot status check against the backend.
pub struct HealthProbe {
    backend: Arc<dyn GenerationBackend>,
}

impl HealthProbe {
    /// Creates a probe over a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Runs the probe once and logs what it found.
    ///
    /// Returns `None` when the check itself failed; that too is only
    /// informational.
    pub async fn run_once(&self) -> Option<HealthResponse> {
        let report = match self.backend.health().await {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "backend health check failed");
                return None;
            }
        };

        if report.modules_available {
            info!("backend processing modules loaded");
        } else {
            warn!("backend running in placeholder mode");
        }

        if report.comfyui_connected {
            info!("generation service connected");
        } else {
            warn!("generation service not connected");
        }

        Some(report)
    }

    /// Fire-and-forget variant for page load: runs the probe on its own
    /// task.
    pub fn spawn(backend: Arc<dyn GenerationBackend>) -> JoinHandle<Option<HealthResponse>> {
        tokio::spawn(async move { Self::new(backend).run_once().await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportFailure;
    use crate::testing::ScriptedBackend;

    #[tokio::test]
    async fn test_probe_reports_health() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.script_health(Ok(HealthResponse {
            modules_available: true,
            comfyui_connected: false,
        }));

        let report = HealthProbe::new(backend).run_once().await;
        assert_eq!(
            report,
            Some(HealthResponse {
                modules_available: true,
                comfyui_connected: false,
            })
        );
    }

    #[tokio::test]
    async fn test_probe_swallows_transport_failure() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.script_health(Err(TransportFailure::new("health", "connection refused")));

        let report = HealthProbe::new(backend).run_once().await;
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_spawned_probe_completes() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.script_health(Ok(HealthResponse::default()));

        let handle = HealthProbe::spawn(backend);
        let report = handle.await.unwrap();
        assert!(report.is_some());
    }
}
