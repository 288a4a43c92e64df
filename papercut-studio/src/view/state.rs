//! The view state store.

use crate::core::{ActiveArtifact, SceneKind, SceneSlot, WorkflowStage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The pending indicator: whether an asynchronous operation is in flight,
/// what message it shows, and the backend-supplied progress steps.
///
/// Progress steps are display-only and carry no control semantics; a new list
/// replaces any prior one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingState {
    /// Whether the pending indicator is shown.
    pub active: bool,
    /// The message shown alongside the indicator.
    pub message: String,
    /// Backend-supplied progress steps, rendered verbatim.
    pub steps: Vec<String>,
}

/// The single source of truth for the page.
///
/// Holds the current workflow stage, the active artifact, the per-scene
/// slots, and the pending indicator. Mutation goes through the controller;
/// each field has exactly one writer component, and state is always written
/// before the pending indicator clears so observers never read stale values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    stage: WorkflowStage,
    artifact: ActiveArtifact,
    slots: BTreeMap<SceneKind, SceneSlot>,
    pending: PendingState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates the load-time state: input stage, empty artifact, cleared
    /// slots, no pending indicator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: WorkflowStage::Input,
            artifact: ActiveArtifact::new(),
            slots: SceneKind::REGISTRY
                .iter()
                .map(|scene| (*scene, SceneSlot::cleared()))
                .collect(),
            pending: PendingState::default(),
        }
    }

    /// The current workflow stage.
    #[must_use]
    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// The active artifact record.
    #[must_use]
    pub fn artifact(&self) -> &ActiveArtifact {
        &self.artifact
    }

    /// The slot for one scene.
    ///
    /// # Panics
    ///
    /// Never in practice: every registry scene has a slot from construction.
    #[must_use]
    pub fn slot(&self, scene: SceneKind) -> &SceneSlot {
        &self.slots[&scene]
    }

    /// All slots, in registry order.
    #[must_use]
    pub fn slots(&self) -> &BTreeMap<SceneKind, SceneSlot> {
        &self.slots
    }

    /// The pending indicator state.
    #[must_use]
    pub fn pending(&self) -> &PendingState {
        &self.pending
    }

    /// Returns true if an asynchronous operation is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.active
    }

    pub(crate) fn set_stage(&mut self, stage: WorkflowStage) {
        self.stage = stage;
    }

    pub(crate) fn artifact_mut(&mut self) -> &mut ActiveArtifact {
        &mut self.artifact
    }

    /// Full reset back to the input stage: artifact, slots, and pending state
    /// are all cleared together. Idempotent.
    pub(crate) fn reset_to_input(&mut self) {
        self.stage = WorkflowStage::Input;
        self.artifact.clear();
        for slot in self.slots.values_mut() {
            *slot = SceneSlot::cleared();
        }
        self.pending = PendingState::default();
    }

    /// Initializes every slot for scene review: overlay visible, no
    /// composite.
    pub(crate) fn prime_scene_slots(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = SceneSlot::primed();
        }
    }

    pub(crate) fn set_scene_composite(&mut self, scene: SceneKind, url: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(&scene) {
            slot.set_composite(url);
        }
    }

    pub(crate) fn begin_pending(&mut self, message: impl Into<String>) {
        self.pending = PendingState {
            active: true,
            message: message.into(),
            steps: Vec::new(),
        };
    }

    pub(crate) fn set_pending_message(&mut self, message: impl Into<String>) {
        self.pending.message = message.into();
    }

    pub(crate) fn set_progress_steps(&mut self, steps: Vec<String>) {
        self.pending.steps = steps;
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_clean() {
        let state = ViewState::new();
        assert_eq!(state.stage(), WorkflowStage::Input);
        assert!(!state.artifact().has_artifact());
        assert!(!state.is_pending());
        for scene in SceneKind::REGISTRY {
            assert_eq!(*state.slot(scene), SceneSlot::cleared());
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ViewState::new();
        state.artifact_mut().begin("red dragon");
        state.artifact_mut().set_url("/img/1.png");
        state.set_stage(WorkflowStage::SceneReview);
        state.prime_scene_slots();
        state.set_scene_composite(SceneKind::Door, "/output/door.png");
        state.begin_pending("working...");

        state.reset_to_input();

        assert_eq!(state.stage(), WorkflowStage::Input);
        assert!(!state.artifact().has_artifact());
        assert!(state.artifact().prompt_text.is_empty());
        assert!(!state.is_pending());
        for scene in SceneKind::REGISTRY {
            assert_eq!(*state.slot(scene), SceneSlot::cleared());
        }
    }

    #[test]
    fn test_scene_composite_is_per_scene() {
        let mut state = ViewState::new();
        state.prime_scene_slots();
        state.set_scene_composite(SceneKind::Wall, "/output/wall.png");

        assert!(state.slot(SceneKind::Wall).has_composite());
        assert!(!state.slot(SceneKind::Wall).overlay_visible);
        assert!(state.slot(SceneKind::Window).overlay_visible);
        assert!(state.slot(SceneKind::Door).overlay_visible);
    }

    #[test]
    fn test_progress_steps_replace_prior_list() {
        let mut state = ViewState::new();
        state.begin_pending("working...");
        state.set_progress_steps(vec!["queued".to_string()]);
        state.set_progress_steps(vec!["sampling".to_string(), "done".to_string()]);

        assert_eq!(state.pending().steps, vec!["sampling", "done"]);
    }
}
