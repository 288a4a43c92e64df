//! The scene composite orchestrator.
//!
//! Issues one composite request per registry scene, strictly sequentially:
//! request N+1 is not sent until request N's outcome is resolved. Sequencing
//! is a deliberate policy, trading latency for a one-at-a-time backend load
//! profile and a deterministic completion order.

use super::StudioController;
use crate::backend::RenderSceneRequest;
use crate::core::SceneKind;
use crate::errors::{FailureKind, PreconditionError, StudioError};
use crate::view::ViewEvent;
use serde::Serialize;
use tracing::{info, warn};

/// Record of one scene's failed composite attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneFailure {
    /// The scene whose composite failed.
    pub scene: SceneKind,
    /// Which way it failed.
    pub kind: FailureKind,
    /// Description of the failure.
    pub message: String,
}

/// Outcome of a full composite pass, reported only after every scene has
/// been attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompositeSummary {
    /// Number of scenes attempted.
    pub attempted: usize,
    /// Number of scenes whose composite succeeded.
    pub succeeded: usize,
    /// One record per failed scene.
    pub failures: Vec<SceneFailure>,
}

impl CompositeSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any scene failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if every attempted scene succeeded.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.attempted > 0 && self.succeeded == self.attempted
    }

    fn record_failure(&mut self, scene: SceneKind, kind: FailureKind, message: String) {
        self.failures.push(SceneFailure {
            scene,
            kind,
            message,
        });
    }
}

impl StudioController {
    /// Composites the active artifact into every registry scene.
    ///
    /// Per-scene outcomes are isolated: a success sets that scene's
    /// composite and hides its overlay, never to be rolled back; a failure
    /// leaves that slot exactly as it was and the loop continues — one
    /// scene's failure must not prevent previewing the others.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when no artifact is available (callers
    /// normally arrive via [`Self::to_scene_review`], which guarantees it).
    /// Individual scene failures are never an `Err`; they are reported in
    /// the summary.
    pub async fn render_all_scenes(&mut self) -> Result<CompositeSummary, StudioError> {
        let Some(artifact_url) = self.state().artifact().url().map(String::from) else {
            return Err(PreconditionError::new(
                "scene compositing requires a generated artifact",
                self.state().stage().to_string(),
            )
            .into());
        };

        let mut summary = CompositeSummary::new();

        for scene in SceneKind::REGISTRY {
            summary.attempted += 1;
            info!(%scene, "requesting scene composite");

            let request = RenderSceneRequest::new(artifact_url.clone(), scene);
            match self.backend().render_scene(&request).await {
                Ok(response) if response.success => {
                    if let Some(url) = response.scene_image_url {
                        self.state_mut().set_scene_composite(scene, url.clone());
                        summary.succeeded += 1;
                        self.sink()
                            .emit(&ViewEvent::SceneComposited { scene, url })
                            .await;
                        info!(%scene, "scene composite ready");
                    } else {
                        let message = "response carried no composite reference".to_string();
                        warn!(%scene, %message, "scene composite failed");
                        summary.record_failure(scene, FailureKind::Logical, message.clone());
                        self.sink()
                            .emit(&ViewEvent::SceneCompositeFailed { scene, message })
                            .await;
                    }
                }
                Ok(response) => {
                    let message = response
                        .message
                        .unwrap_or_else(|| "compositing could not run".to_string());
                    warn!(%scene, %message, "scene composite failed");
                    summary.record_failure(scene, FailureKind::Logical, message.clone());
                    self.sink()
                        .emit(&ViewEvent::SceneCompositeFailed { scene, message })
                        .await;
                }
                Err(err) => {
                    warn!(%scene, error = %err, "scene composite failed in transport");
                    summary.record_failure(scene, FailureKind::Transport, err.to_string());
                    self.sink()
                        .emit(&ViewEvent::SceneCompositeFailed {
                            scene,
                            message: err.to_string(),
                        })
                        .await;
                }
            }
        }

        info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            "scene compositing finished"
        );
        Ok(summary)
    }

    /// The single user action behind the scene page: enter scene review,
    /// then composite every scene.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when no artifact is available (the
    /// violation is also surfaced through the sink by
    /// [`Self::to_scene_review`]).
    pub async fn review_in_scenes(&mut self) -> Result<CompositeSummary, StudioError> {
        self.to_scene_review()?;
        self.render_all_scenes().await
    }
}
