//! The single active artifact record.

use serde::{Deserialize, Serialize};

/// The one artifact the workflow is currently working with.
///
/// A single slot, not a collection: a new generation overwrites the previous
/// prompt and clears the previous URL. `artifact_url` stays `None` until a
/// generation succeeds and is cleared whenever the workflow returns to the
/// input stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveArtifact {
    /// The prompt text the artifact was (or will be) generated from.
    pub prompt_text: String,
    /// The artifact reference, set only after a successful generation.
    pub artifact_url: Option<String>,
}

impl ActiveArtifact {
    /// Creates an empty artifact record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation: records the prompt and drops any previous
    /// artifact reference.
    pub fn begin(&mut self, prompt_text: impl Into<String>) {
        self.prompt_text = prompt_text.into();
        self.artifact_url = None;
    }

    /// Stores the artifact reference from a successful generation.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.artifact_url = Some(url.into());
    }

    /// Clears both the prompt and the artifact reference.
    pub fn clear(&mut self) {
        self.prompt_text.clear();
        self.artifact_url = None;
    }

    /// Returns true if a generated artifact is available.
    #[must_use]
    pub fn has_artifact(&self) -> bool {
        self.artifact_url.is_some()
    }

    /// Returns the artifact URL, if set.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.artifact_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_overwrites_previous() {
        let mut artifact = ActiveArtifact::new();
        artifact.begin("red dragon");
        artifact.set_url("/img/1.png");
        assert!(artifact.has_artifact());

        artifact.begin("blue fish");
        assert_eq!(artifact.prompt_text, "blue fish");
        assert!(!artifact.has_artifact());
    }

    #[test]
    fn test_clear() {
        let mut artifact = ActiveArtifact::new();
        artifact.begin("red dragon");
        artifact.set_url("/img/1.png");

        artifact.clear();
        assert!(artifact.prompt_text.is_empty());
        assert!(artifact.url().is_none());
    }
}
