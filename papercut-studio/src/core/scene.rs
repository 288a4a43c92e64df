//! The fixed scene registry and per-scene slot state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A preset background scene the artifact can be composited into.
///
/// The registry is fixed; `REGISTRY` is also the order in which composite
/// requests are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// A window frame scene.
    Window,
    /// A wall scene.
    Wall,
    /// A door scene.
    Door,
}

impl SceneKind {
    /// The fixed scene registry, in composite request order.
    pub const REGISTRY: [Self; 3] = [Self::Window, Self::Wall, Self::Door];

    /// Returns the wire identifier for this scene.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Wall => "wall",
            Self::Door => "door",
        }
    }

    /// Parses a wire identifier back into a scene kind.
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "window" => Some(Self::Window),
            "wall" => Some(Self::Wall),
            "door" => Some(Self::Door),
            _ => None,
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-scene state: whether the raw overlay is shown and whether a composite
/// has replaced it.
///
/// Lifecycle: `primed()` when entering scene review, composite set and
/// overlay hidden on that scene's success, `cleared()` when scene review is
/// exited via the input stage. One scene's outcome never affects another's
/// slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSlot {
    /// Whether the raw artifact overlay is visible in this scene's preview.
    pub overlay_visible: bool,
    /// The composite image URL, set on this scene's successful composite.
    pub composite_url: Option<String>,
}

impl SceneSlot {
    /// The slot state on entering scene review: overlay shown, no composite.
    #[must_use]
    pub fn primed() -> Self {
        Self {
            overlay_visible: true,
            composite_url: None,
        }
    }

    /// The slot state outside scene review.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Records a successful composite: stores the URL and hides the overlay.
    pub fn set_composite(&mut self, url: impl Into<String>) {
        self.composite_url = Some(url.into());
        self.overlay_visible = false;
    }

    /// Returns true if a composite image is available for this scene.
    #[must_use]
    pub fn has_composite(&self) -> bool {
        self.composite_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        assert_eq!(
            SceneKind::REGISTRY,
            [SceneKind::Window, SceneKind::Wall, SceneKind::Door]
        );
    }

    #[test]
    fn test_wire_identifiers_round_trip() {
        for scene in SceneKind::REGISTRY {
            assert_eq!(SceneKind::from_str_opt(scene.as_str()), Some(scene));
        }
        assert_eq!(SceneKind::from_str_opt("garden"), None);
    }

    #[test]
    fn test_serialize_matches_wire_identifier() {
        let json = serde_json::to_string(&SceneKind::Window).unwrap();
        assert_eq!(json, r#""window""#);
    }

    #[test]
    fn test_slot_lifecycle() {
        let mut slot = SceneSlot::primed();
        assert!(slot.overlay_visible);
        assert!(!slot.has_composite());

        slot.set_composite("/output/scene_window.png");
        assert!(!slot.overlay_visible);
        assert_eq!(slot.composite_url.as_deref(), Some("/output/scene_window.png"));

        let cleared = SceneSlot::cleared();
        assert!(!cleared.overlay_visible);
        assert!(!cleared.has_composite());
    }
}
