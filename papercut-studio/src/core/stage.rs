//! The workflow stage enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The page the workflow is currently on.
///
/// Exactly one stage is active at any time. The stage is owned by the
/// controller, initialized to `Input` at load, and reset to `Input` whenever
/// the user returns to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// The prompt entry page.
    Input,
    /// The generation result page.
    Result,
    /// The scene compositing preview page.
    SceneReview,
}

impl Default for WorkflowStage {
    fn default() -> Self {
        Self::Input
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Result => write!(f, "result"),
            Self::SceneReview => write!(f, "scene_review"),
        }
    }
}

impl WorkflowStage {
    /// Returns true if this is the prompt entry stage.
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Returns true if this is the generation result stage.
    #[must_use]
    pub fn is_result(&self) -> bool {
        matches!(self, Self::Result)
    }

    /// Returns true if this is the scene review stage.
    #[must_use]
    pub fn is_scene_review(&self) -> bool {
        matches!(self, Self::SceneReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_input() {
        assert_eq!(WorkflowStage::default(), WorkflowStage::Input);
    }

    #[test]
    fn test_display() {
        assert_eq!(WorkflowStage::Input.to_string(), "input");
        assert_eq!(WorkflowStage::Result.to_string(), "result");
        assert_eq!(WorkflowStage::SceneReview.to_string(), "scene_review");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&WorkflowStage::SceneReview).unwrap();
        assert_eq!(json, r#""scene_review""#);

        let deserialized: WorkflowStage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, WorkflowStage::SceneReview);
    }

    #[test]
    fn test_predicates() {
        assert!(WorkflowStage::Input.is_input());
        assert!(WorkflowStage::Result.is_result());
        assert!(WorkflowStage::SceneReview.is_scene_review());
        assert!(!WorkflowStage::Input.is_scene_review());
    }
}
