//! The workflow controller.
//!
//! [`StudioController`] owns the view state and coordinates every workflow
//! operation: page transitions, generation, scene compositing, and
//! downloads. There are no ambient globals; embedding code constructs one
//! controller per page session and wires its own [`ViewSink`] to project
//! state changes.

mod download;
mod generation;
mod scenes;
mod transitions;

pub use download::{DownloadTarget, SavedDownload};
pub use scenes::{CompositeSummary, SceneFailure};

use crate::assets::AssetLoader;
use crate::backend::GenerationBackend;
use crate::utils::{now_utc, Timestamp};
use crate::view::{NoOpViewSink, ViewSink, ViewState};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Identity of one page session, for log correlation only.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    /// Random session identifier.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: Timestamp,
}

impl SessionIdentity {
    /// Creates a fresh session identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: now_utc(),
        }
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller-level configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Directory downloads are written into.
    pub download_dir: PathBuf,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("downloads"),
        }
    }
}

/// The page/workflow controller.
///
/// Owns the [`ViewState`]; orchestrators mutate disjoint subsets of it, and
/// every user-visible change flows out through the configured sink.
pub struct StudioController {
    identity: SessionIdentity,
    config: StudioConfig,
    state: ViewState,
    backend: Arc<dyn GenerationBackend>,
    assets: Arc<dyn AssetLoader>,
    sink: Arc<dyn ViewSink>,
}

impl StudioController {
    /// Creates a controller over a backend and asset loader, with no sink
    /// and default configuration.
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>, assets: Arc<dyn AssetLoader>) -> Self {
        let identity = SessionIdentity::new();
        tracing::info!(
            session_id = %identity.session_id,
            "papercut studio frontend ready"
        );

        Self {
            identity,
            config: StudioConfig::default(),
            state: ViewState::new(),
            backend,
            assets,
            sink: Arc::new(NoOpViewSink),
        }
    }

    /// Sets the view sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ViewSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the controller configuration.
    #[must_use]
    pub fn with_config(mut self, config: StudioConfig) -> Self {
        self.config = config;
        self
    }

    /// The current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// This session's identity.
    #[must_use]
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub(crate) fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub(crate) fn backend(&self) -> &Arc<dyn GenerationBackend> {
        &self.backend
    }

    pub(crate) fn assets(&self) -> &Arc<dyn AssetLoader> {
        &self.assets
    }

    pub(crate) fn sink(&self) -> &Arc<dyn ViewSink> {
        &self.sink
    }

    pub(crate) fn config(&self) -> &StudioConfig {
        &self.config
    }
}
