//! Scripted collaborators that record calls and return configurable
//! outcomes.

use super::fixtures;
use crate::assets::AssetLoader;
use crate::backend::{
    GenerateRequest, GenerateResponse, GenerationBackend, HealthResponse, RenderSceneRequest,
    RenderSceneResponse,
};
use crate::core::SceneKind;
use crate::errors::{AssetLoadFailure, TransportFailure};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A backend whose responses are scripted per call and which records every
/// request it receives.
///
/// Unscripted calls fall back to the success fixtures, so tests only script
/// what they care about.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    generate_script: Mutex<VecDeque<Result<GenerateResponse, TransportFailure>>>,
    scene_scripts: Mutex<HashMap<SceneKind, Result<RenderSceneResponse, TransportFailure>>>,
    health_script: Mutex<Option<Result<HealthResponse, TransportFailure>>>,
    generate_calls: Mutex<Vec<GenerateRequest>>,
    scene_calls: Mutex<Vec<RenderSceneRequest>>,
    beacons: AtomicUsize,
}

impl ScriptedBackend {
    /// Creates a backend with empty scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome of the next `generate` call.
    pub fn script_generate(&self, outcome: Result<GenerateResponse, TransportFailure>) {
        self.generate_script.lock().push_back(outcome);
    }

    /// Sets the outcome for one scene's `render_scene` calls.
    pub fn script_scene(
        &self,
        scene: SceneKind,
        outcome: Result<RenderSceneResponse, TransportFailure>,
    ) {
        self.scene_scripts.lock().insert(scene, outcome);
    }

    /// Sets the outcome of `health` calls.
    pub fn script_health(&self, outcome: Result<HealthResponse, TransportFailure>) {
        *self.health_script.lock() = Some(outcome);
    }

    /// Every `generate` request received, in order.
    #[must_use]
    pub fn generate_calls(&self) -> Vec<GenerateRequest> {
        self.generate_calls.lock().clone()
    }

    /// Every `render_scene` request received, in order.
    #[must_use]
    pub fn scene_calls(&self) -> Vec<RenderSceneRequest> {
        self.scene_calls.lock().clone()
    }

    /// Number of shutdown beacons dispatched.
    #[must_use]
    pub fn beacon_count(&self) -> usize {
        self.beacons.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, TransportFailure> {
        self.generate_calls.lock().push(request.clone());
        self.generate_script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(fixtures::generate_success()))
    }

    async fn render_scene(
        &self,
        request: &RenderSceneRequest,
    ) -> Result<RenderSceneResponse, TransportFailure> {
        self.scene_calls.lock().push(request.clone());
        let scene = SceneKind::from_str_opt(&request.scene_type);
        scene
            .and_then(|scene| self.scene_scripts.lock().get(&scene).cloned())
            .unwrap_or_else(|| {
                Ok(fixtures::render_scene_success(
                    scene.unwrap_or(SceneKind::Window),
                ))
            })
    }

    async fn health(&self) -> Result<HealthResponse, TransportFailure> {
        self.health_script
            .lock()
            .clone()
            .unwrap_or_else(|| Ok(fixtures::health_ok()))
    }

    fn send_shutdown_beacon(&self) {
        self.beacons.fetch_add(1, Ordering::SeqCst);
    }
}

/// An asset loader that serves fixed bytes, records every fetch, and can be
/// told to fail for specific URLs.
#[derive(Debug)]
pub struct ScriptedAssetLoader {
    bytes: Vec<u8>,
    failing_urls: Mutex<HashSet<String>>,
    fetched: Mutex<Vec<String>>,
}

impl Default for ScriptedAssetLoader {
    fn default() -> Self {
        Self {
            bytes: vec![0x89, b'P', b'N', b'G'],
            failing_urls: Mutex::new(HashSet::new()),
            fetched: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedAssetLoader {
    /// Creates a loader that succeeds for every URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes fetches of `url` fail.
    pub fn fail_for(&self, url: impl Into<String>) {
        self.failing_urls.lock().insert(url.into());
    }

    /// Every URL fetched, in order.
    #[must_use]
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().clone()
    }
}

#[async_trait]
impl AssetLoader for ScriptedAssetLoader {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetLoadFailure> {
        self.fetched.lock().push(url.to_string());
        if self.failing_urls.lock().contains(url) {
            return Err(AssetLoadFailure::new(url, "scripted failure"));
        }
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_backend_defaults_to_success() {
        let backend = ScriptedBackend::new();
        let response = backend
            .generate(&GenerateRequest::new("red dragon"))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(backend.generate_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_scene_failure_is_scoped_to_its_scene() {
        let backend = ScriptedBackend::new();
        backend.script_scene(
            SceneKind::Wall,
            Ok(fixtures::render_scene_failure("timeout")),
        );

        let wall = backend
            .render_scene(&RenderSceneRequest::new("/img/1.png", SceneKind::Wall))
            .await
            .unwrap();
        assert!(!wall.success);

        let door = backend
            .render_scene(&RenderSceneRequest::new("/img/1.png", SceneKind::Door))
            .await
            .unwrap();
        assert!(door.success);
    }

    #[tokio::test]
    async fn test_asset_loader_records_and_fails_on_request() {
        let loader = ScriptedAssetLoader::new();
        loader.fail_for("/img/broken.png");

        assert!(loader.fetch("/img/ok.png").await.is_ok());
        assert!(loader.fetch("/img/broken.png").await.is_err());
        assert_eq!(loader.fetched(), vec!["/img/ok.png", "/img/broken.png"]);
    }
}
