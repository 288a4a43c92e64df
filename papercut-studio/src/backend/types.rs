//! Wire types for the backend endpoints.

use crate::core::SceneKind;
use serde::{Deserialize, Serialize};

/// Form body for `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    /// The prompt text.
    pub prompt: String,
    /// Scene selector; the client always submits `"none"` and composites
    /// separately through `render_scene`.
    pub scene: String,
}

impl GenerateRequest {
    /// Creates a generate request for a prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            scene: "none".to_string(),
        }
    }
}

/// JSON body of the `POST /api/generate` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Whether generation ran to completion.
    pub success: bool,
    /// URL of the generated artifact, present on success.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ordered human-readable progress steps, rendered verbatim.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Failure (or informational) message.
    #[serde(default)]
    pub message: Option<String>,
}

/// JSON body for `POST /api/render_scene`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSceneRequest {
    /// URL of the artifact to composite.
    pub papercut_image: String,
    /// Wire identifier of the target scene.
    pub scene_type: String,
}

impl RenderSceneRequest {
    /// Creates a composite request for one scene.
    #[must_use]
    pub fn new(papercut_image: impl Into<String>, scene: SceneKind) -> Self {
        Self {
            papercut_image: papercut_image.into(),
            scene_type: scene.as_str().to_string(),
        }
    }
}

/// JSON body of the `POST /api/render_scene` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSceneResponse {
    /// Whether compositing ran to completion.
    pub success: bool,
    /// URL of the composite image, present on success.
    #[serde(default)]
    pub scene_image_url: Option<String>,
    /// Failure message.
    #[serde(default)]
    pub message: Option<String>,
}

/// JSON body of the `GET /api/health` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the backend's processing modules are loaded (false means
    /// placeholder mode).
    #[serde(default)]
    pub modules_available: bool,
    /// Whether the upstream generation service is reachable.
    #[serde(default)]
    pub comfyui_connected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults_scene_none() {
        let request = GenerateRequest::new("red dragon");
        assert_eq!(request.scene, "none");
    }

    #[test]
    fn test_generate_response_tolerates_missing_fields() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success": false, "message": "busy"}"#).unwrap();
        assert!(!response.success);
        assert!(response.image_url.is_none());
        assert!(response.steps.is_empty());
        assert_eq!(response.message.as_deref(), Some("busy"));
    }

    #[test]
    fn test_render_scene_request_uses_wire_identifier() {
        let request = RenderSceneRequest::new("/img/1.png", SceneKind::Window);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["scene_type"], "window");
        assert_eq!(json["papercut_image"], "/img/1.png");
    }

    #[test]
    fn test_health_response_defaults() {
        let response: HealthResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.modules_available);
        assert!(!response.comfyui_connected);
    }
}
