//! The download agent.
//!
//! Materializes a save-to-file action for the primary artifact or a scene
//! composite. For a scene, the composite is preferred; when it is missing
//! the primary artifact is saved under a scene-qualified name instead, and
//! that downgrade is observable, never silent.

use super::StudioController;
use crate::core::SceneKind;
use crate::errors::{NothingToDownloadError, StudioError};
use crate::utils::unix_millis;
use crate::view::ViewEvent;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// What to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTarget {
    /// The primary generated artifact.
    Artifact,
    /// One scene's composite (falling back to the artifact when missing).
    Scene(SceneKind),
}

impl fmt::Display for DownloadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact => write!(f, "artifact"),
            Self::Scene(scene) => write!(f, "scene '{scene}'"),
        }
    }
}

/// A download written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    /// Where the file was written.
    pub path: PathBuf,
    /// The generated filename.
    pub filename: String,
    /// The URL the bytes came from.
    pub source_url: String,
    /// True when the primary artifact was saved in place of a missing scene
    /// composite.
    pub degraded: bool,
}

#[derive(Debug)]
struct DownloadPlan {
    url: String,
    filename: String,
    degraded: bool,
}

impl StudioController {
    /// Downloads the target into the configured download directory.
    ///
    /// Filenames carry a millisecond timestamp token so repeated downloads
    /// in one session never collide.
    ///
    /// # Errors
    ///
    /// - [`NothingToDownloadError`] when neither the requested composite nor
    ///   the primary artifact exists.
    /// - [`crate::errors::AssetLoadFailure`] when the bytes cannot be
    ///   fetched, or [`StudioError::Io`] when they cannot be written.
    pub async fn download(&self, target: DownloadTarget) -> Result<SavedDownload, StudioError> {
        let plan = self.resolve_download(target)?;

        if plan.degraded {
            warn!(
                download = %target,
                filename = %plan.filename,
                "scene composite unavailable, downloading the primary artifact instead"
            );
        }

        let bytes = self.assets().fetch(&plan.url).await?;

        let dir = &self.config().download_dir;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&plan.filename);
        tokio::fs::write(&path, &bytes).await?;

        info!(path = %path.display(), degraded = plan.degraded, "download saved");
        self.sink()
            .emit(&ViewEvent::DownloadSaved {
                filename: plan.filename.clone(),
                degraded: plan.degraded,
            })
            .await;

        Ok(SavedDownload {
            path,
            filename: plan.filename,
            source_url: plan.url,
            degraded: plan.degraded,
        })
    }

    /// Picks the URL and filename for a target without touching the network.
    fn resolve_download(&self, target: DownloadTarget) -> Result<DownloadPlan, StudioError> {
        let token = unix_millis();
        match target {
            DownloadTarget::Artifact => {
                let url = self
                    .state()
                    .artifact()
                    .url()
                    .ok_or_else(|| NothingToDownloadError::new("artifact"))?;
                Ok(DownloadPlan {
                    url: url.to_string(),
                    filename: format!("papercut_{token}.png"),
                    degraded: false,
                })
            }
            DownloadTarget::Scene(scene) => {
                let slot = self.state().slot(scene);
                if let Some(url) = slot.composite_url.as_deref() {
                    return Ok(DownloadPlan {
                        url: url.to_string(),
                        filename: format!("papercut_scene_{scene}_{token}.png"),
                        degraded: false,
                    });
                }

                // Degraded path: the raw artifact under a scene-qualified
                // name.
                let url = self
                    .state()
                    .artifact()
                    .url()
                    .ok_or_else(|| NothingToDownloadError::new(format!("scene '{scene}'")))?;
                Ok(DownloadPlan {
                    url: url.to_string(),
                    filename: format!("papercut_{scene}_{token}.png"),
                    degraded: true,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedAssetLoader, ScriptedBackend};
    use std::sync::Arc;

    fn controller_with_artifact() -> StudioController {
        let mut controller = StudioController::new(
            Arc::new(ScriptedBackend::new()),
            Arc::new(ScriptedAssetLoader::new()),
        );
        controller.state_mut().artifact_mut().begin("red dragon");
        controller.state_mut().artifact_mut().set_url("/img/1.png");
        controller
    }

    #[test]
    fn test_artifact_download_requires_artifact() {
        let controller = StudioController::new(
            Arc::new(ScriptedBackend::new()),
            Arc::new(ScriptedAssetLoader::new()),
        );
        let err = controller.resolve_download(DownloadTarget::Artifact).unwrap_err();
        assert!(matches!(err, StudioError::NothingToDownload(_)));
    }

    #[test]
    fn test_artifact_filename_shape() {
        let controller = controller_with_artifact();
        let plan = controller.resolve_download(DownloadTarget::Artifact).unwrap();
        assert_eq!(plan.url, "/img/1.png");
        assert!(plan.filename.starts_with("papercut_"));
        assert!(plan.filename.ends_with(".png"));
        assert!(!plan.degraded);
    }

    #[test]
    fn test_scene_download_prefers_composite() {
        let mut controller = controller_with_artifact();
        controller.state_mut().prime_scene_slots();
        controller
            .state_mut()
            .set_scene_composite(SceneKind::Door, "/output/door.png");

        let plan = controller
            .resolve_download(DownloadTarget::Scene(SceneKind::Door))
            .unwrap();
        assert_eq!(plan.url, "/output/door.png");
        assert!(plan.filename.starts_with("papercut_scene_door_"));
        assert!(!plan.degraded);
    }

    #[test]
    fn test_scene_download_falls_back_to_artifact() {
        let mut controller = controller_with_artifact();
        controller.state_mut().prime_scene_slots();

        let plan = controller
            .resolve_download(DownloadTarget::Scene(SceneKind::Door))
            .unwrap();
        assert_eq!(plan.url, "/img/1.png");
        assert!(plan.filename.starts_with("papercut_door_"));
        assert!(plan.degraded);
    }

    #[test]
    fn test_scene_download_with_nothing_at_all() {
        let controller = StudioController::new(
            Arc::new(ScriptedBackend::new()),
            Arc::new(ScriptedAssetLoader::new()),
        );
        let err = controller
            .resolve_download(DownloadTarget::Scene(SceneKind::Wall))
            .unwrap_err();
        assert!(matches!(err, StudioError::NothingToDownload(_)));
    }
}
