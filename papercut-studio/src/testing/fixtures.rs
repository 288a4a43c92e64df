//! Canned wire responses shaped like the real backend's.

use crate::backend::{GenerateResponse, HealthResponse, RenderSceneResponse};
use crate::core::SceneKind;

/// The progress steps the real processing pipeline emits.
#[must_use]
pub fn pipeline_steps() -> Vec<String> {
    [
        "Initializing generation client...",
        "Step 1/5: sampling the base image...",
        "Step 2/5: desaturating...",
        "Step 3/5: boosting contrast...",
        "Step 4/5: removing the white background...",
        "Step 5/5: recoloring to papercut red...",
        "Papercut pattern ready",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// A successful generation response.
#[must_use]
pub fn generate_success() -> GenerateResponse {
    GenerateResponse {
        success: true,
        image_url: Some("/output/papercut_result.png".to_string()),
        steps: pipeline_steps(),
        message: None,
    }
}

/// A generation response reporting a logical failure.
#[must_use]
pub fn generate_logical_failure(message: impl Into<String>) -> GenerateResponse {
    GenerateResponse {
        success: false,
        image_url: None,
        steps: vec!["Initializing generation client...".to_string()],
        message: Some(message.into()),
    }
}

/// A successful composite response for one scene.
#[must_use]
pub fn render_scene_success(scene: SceneKind) -> RenderSceneResponse {
    RenderSceneResponse {
        success: true,
        scene_image_url: Some(format!("/output/scene_{scene}.png")),
        message: None,
    }
}

/// A composite response reporting a logical failure.
#[must_use]
pub fn render_scene_failure(message: impl Into<String>) -> RenderSceneResponse {
    RenderSceneResponse {
        success: false,
        scene_image_url: None,
        message: Some(message.into()),
    }
}

/// A fully available backend.
#[must_use]
pub fn health_ok() -> HealthResponse {
    HealthResponse {
        modules_available: true,
        comfyui_connected: true,
    }
}

/// A backend running without its processing modules.
#[must_use]
pub fn health_placeholder() -> HealthResponse {
    HealthResponse {
        modules_available: false,
        comfyui_connected: false,
    }
}
