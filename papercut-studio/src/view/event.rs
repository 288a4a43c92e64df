//! Typed view projection events.

use crate::core::{SceneKind, WorkflowStage};
use serde::Serialize;

/// A change the rendering surface must project.
///
/// Events describe what the view state now looks like; they never carry
/// control semantics back into the workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum ViewEvent {
    /// The workflow moved to a different stage.
    StageChanged {
        /// The stage before the transition.
        from: WorkflowStage,
        /// The stage after the transition.
        to: WorkflowStage,
    },
    /// The pending indicator appeared with an initial message.
    PendingStarted {
        /// The message shown alongside the indicator.
        message: String,
    },
    /// The pending indicator's message changed.
    PendingMessage {
        /// The new message.
        message: String,
    },
    /// Backend progress steps replaced the prior list.
    ProgressSteps {
        /// The steps, rendered verbatim in order.
        steps: Vec<String>,
    },
    /// The pending indicator cleared.
    PendingCleared,
    /// The active artifact reference changed.
    ArtifactUpdated {
        /// The new artifact URL.
        url: String,
    },
    /// Scene review was entered: every overlay is visible again.
    SceneOverlaysPrimed,
    /// One scene's composite replaced its overlay.
    SceneComposited {
        /// The scene that was composited.
        scene: SceneKind,
        /// The composite image URL.
        url: String,
    },
    /// One scene's composite attempt failed; its slot is unchanged.
    SceneCompositeFailed {
        /// The scene that failed.
        scene: SceneKind,
        /// Description of the failure.
        message: String,
    },
    /// A download was written to disk.
    DownloadSaved {
        /// The generated filename.
        filename: String,
        /// True when the primary artifact was saved in place of a missing
        /// scene composite.
        degraded: bool,
    },
    /// A failure the user must see (not merely a log line).
    UserError {
        /// The message to surface.
        message: String,
    },
}

impl ViewEvent {
    /// A stable dotted identifier for this event, used by logging sinks and
    /// test filters.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StageChanged { .. } => "stage.changed",
            Self::PendingStarted { .. } => "pending.started",
            Self::PendingMessage { .. } => "pending.message",
            Self::ProgressSteps { .. } => "pending.steps",
            Self::PendingCleared => "pending.cleared",
            Self::ArtifactUpdated { .. } => "artifact.updated",
            Self::SceneOverlaysPrimed => "scene.primed",
            Self::SceneComposited { .. } => "scene.composited",
            Self::SceneCompositeFailed { .. } => "scene.failed",
            Self::DownloadSaved { .. } => "download.saved",
            Self::UserError { .. } => "user.error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds_are_stable() {
        assert_eq!(ViewEvent::PendingCleared.kind(), "pending.cleared");
        assert_eq!(
            ViewEvent::SceneComposited {
                scene: SceneKind::Door,
                url: "/output/door.png".to_string(),
            }
            .kind(),
            "scene.composited"
        );
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = ViewEvent::StageChanged {
            from: WorkflowStage::Input,
            to: WorkflowStage::Result,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "stage_changed");
        assert_eq!(json["to"], "result");
    }
}
