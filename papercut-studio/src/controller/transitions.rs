//! Page transitions and their reset side effects.
//!
//! Each transition owns the full visibility/reset side effects of its target
//! stage; a stage change without the matching slot/artifact reset is a
//! correctness bug, so all of that happens here and nowhere else.

use super::StudioController;
use crate::core::WorkflowStage;
use crate::errors::{PreconditionError, StudioError};
use crate::view::ViewEvent;
use tracing::debug;

impl StudioController {
    /// Moves from the input stage to the result stage.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when not on the input stage; no state
    /// changes in that case.
    pub fn to_result(&mut self) -> Result<(), StudioError> {
        let from = self.state().stage();
        if !from.is_input() {
            return Err(PreconditionError::new(
                "result stage is entered from the input stage",
                from.to_string(),
            )
            .into());
        }

        self.state_mut().set_stage(WorkflowStage::Result);
        self.sink().try_emit(&ViewEvent::StageChanged {
            from,
            to: WorkflowStage::Result,
        });
        debug!(%from, "entered result stage");
        Ok(())
    }

    /// Returns to the input stage from anywhere.
    ///
    /// The only full-reset path: clears the active artifact, every scene
    /// slot, and the pending indicator. Idempotent.
    pub fn to_input(&mut self) {
        let from = self.state().stage();
        self.state_mut().reset_to_input();
        self.sink().try_emit(&ViewEvent::StageChanged {
            from,
            to: WorkflowStage::Input,
        });
        debug!(%from, "reset to input stage");
    }

    /// Enters scene review.
    ///
    /// Requires a generated artifact. On success every scene slot is
    /// initialized to overlay-visible with no composite.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when no artifact is available; the
    /// violation is surfaced to the user through the sink and no transition
    /// happens.
    pub fn to_scene_review(&mut self) -> Result<(), StudioError> {
        let from = self.state().stage();
        if !self.state().artifact().has_artifact() {
            self.sink().try_emit(&ViewEvent::UserError {
                message: "Generate a papercut pattern first".to_string(),
            });
            return Err(PreconditionError::new(
                "scene review requires a generated artifact",
                from.to_string(),
            )
            .into());
        }

        self.state_mut().prime_scene_slots();
        self.state_mut().set_stage(WorkflowStage::SceneReview);
        self.sink().try_emit(&ViewEvent::StageChanged {
            from,
            to: WorkflowStage::SceneReview,
        });
        self.sink().try_emit(&ViewEvent::SceneOverlaysPrimed);
        debug!(%from, "entered scene review");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::StudioController;
    use crate::core::{SceneKind, SceneSlot, WorkflowStage};
    use crate::errors::StudioError;
    use crate::testing::{ScriptedAssetLoader, ScriptedBackend};
    use crate::view::{CollectingViewSink, ViewEvent};
    use std::sync::Arc;

    fn test_controller() -> (StudioController, Arc<CollectingViewSink>) {
        let sink = Arc::new(CollectingViewSink::new());
        let controller = StudioController::new(
            Arc::new(ScriptedBackend::new()),
            Arc::new(ScriptedAssetLoader::new()),
        )
        .with_sink(sink.clone());
        (controller, sink)
    }

    #[test]
    fn test_to_result_requires_input_stage() {
        let (mut controller, _sink) = test_controller();
        controller.to_result().unwrap();
        assert_eq!(controller.state().stage(), WorkflowStage::Result);

        let err = controller.to_result().unwrap_err();
        assert!(matches!(err, StudioError::Precondition(_)));
        assert_eq!(controller.state().stage(), WorkflowStage::Result);
    }

    #[test]
    fn test_scene_review_blocked_without_artifact() {
        let (mut controller, sink) = test_controller();

        let err = controller.to_scene_review().unwrap_err();
        assert!(matches!(err, StudioError::Precondition(_)));
        assert_eq!(controller.state().stage(), WorkflowStage::Input);
        // Surfaced to the user, not just logged.
        assert_eq!(sink.events_of_kind("user.error").len(), 1);
    }

    #[test]
    fn test_scene_review_primes_every_slot() {
        let (mut controller, _sink) = test_controller();
        controller.state_mut().artifact_mut().begin("red dragon");
        controller.state_mut().artifact_mut().set_url("/img/1.png");

        controller.to_scene_review().unwrap();
        assert_eq!(controller.state().stage(), WorkflowStage::SceneReview);
        for scene in SceneKind::REGISTRY {
            assert_eq!(*controller.state().slot(scene), SceneSlot::primed());
        }
    }

    #[test]
    fn test_to_input_is_idempotent() {
        let (mut controller, _sink) = test_controller();
        controller.state_mut().artifact_mut().begin("red dragon");
        controller.state_mut().artifact_mut().set_url("/img/1.png");
        controller.to_scene_review().unwrap();

        controller.to_input();
        let snapshot = serde_json::to_value(controller.state()).unwrap();

        controller.to_input();
        let again = serde_json::to_value(controller.state()).unwrap();
        assert_eq!(snapshot, again);
        assert_eq!(controller.state().stage(), WorkflowStage::Input);
    }

    #[test]
    fn test_stage_change_events_are_emitted() {
        let (mut controller, sink) = test_controller();
        controller.to_result().unwrap();
        controller.to_input();

        let changes = sink.events_of_kind("stage.changed");
        assert_eq!(changes.len(), 2);
        assert_eq!(
            changes[0],
            ViewEvent::StageChanged {
                from: WorkflowStage::Input,
                to: WorkflowStage::Result,
            }
        );
    }
}
