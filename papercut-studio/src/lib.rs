//! # Papercut Studio
//!
//! The client-side workflow controller of a papercut image-generation web
//! application, with the page's control flow made explicit:
//!
//! - **Typed workflow stages**: prompt input, generation result, and scene
//!   review as a closed enum, with transitions that own their reset side
//!   effects
//! - **Generation orchestration**: prompt submission, progress-step relay,
//!   and an image-load confirmation step so completion means "rendered", not
//!   "HTTP 200"
//! - **Scene compositing**: strictly sequential per-scene requests with
//!   isolated failures and a completion summary
//! - **Best-effort teardown**: a fire-and-forget shutdown beacon reconciled
//!   with ordinary page reloads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use papercut_studio::prelude::*;
//! use std::sync::Arc;
//!
//! let config = BackendConfig::new("http://127.0.0.1:5000");
//! let backend = Arc::new(HttpBackend::new(config.clone()));
//! let assets = Arc::new(HttpAssetLoader::new(config.base_url.clone()));
//!
//! let mut controller = StudioController::new(backend.clone(), assets)
//!     .with_sink(Arc::new(LoggingViewSink::default()));
//!
//! controller.generate("red dragon").await?;
//! let summary = controller.review_in_scenes().await?;
//! controller.download(DownloadTarget::Scene(SceneKind::Door)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod assets;
pub mod backend;
pub mod controller;
pub mod core;
pub mod errors;
pub mod health;
pub mod lifecycle;
pub mod observability;
pub mod testing;
pub mod utils;
pub mod view;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assets::{AssetLoader, HttpAssetLoader};
    pub use crate::backend::{
        BackendConfig, GenerateRequest, GenerateResponse, GenerationBackend, HealthResponse,
        HttpBackend, RenderSceneRequest, RenderSceneResponse,
    };
    pub use crate::controller::{
        CompositeSummary, DownloadTarget, SavedDownload, SceneFailure, SessionIdentity,
        StudioConfig, StudioController,
    };
    pub use crate::core::{ActiveArtifact, SceneKind, SceneSlot, WorkflowStage};
    pub use crate::errors::{
        AssetLoadFailure, FailureKind, LogicalFailure, NothingToDownloadError, PreconditionError,
        StudioError, TransportFailure, ValidationError,
    };
    pub use crate::health::HealthProbe;
    pub use crate::lifecycle::LifecycleAgent;
    pub use crate::utils::{iso_timestamp, normalize_prompt, unix_millis};
    pub use crate::view::{
        CollectingViewSink, LoggingViewSink, NoOpViewSink, ViewEvent, ViewSink, ViewState,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        assert!(true);
    }
}
