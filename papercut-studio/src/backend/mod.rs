//! The backend HTTP contract.
//!
//! [`GenerationBackend`] is the seam between the workflow orchestrators and
//! the generation/compositing service; [`HttpBackend`] is the production
//! implementation. Scripted implementations for tests live in
//! [`crate::testing`].

mod http;
mod types;

pub use http::{BackendConfig, HttpBackend};
pub use types::{
    GenerateRequest, GenerateResponse, HealthResponse, RenderSceneRequest, RenderSceneResponse,
};

use crate::errors::TransportFailure;
use async_trait::async_trait;

/// The backend the client core talks to.
///
/// All methods are ordinary request/response calls except the shutdown
/// beacon, which is a best-effort dispatch with no completion guarantee: the
/// caller's context may not survive long enough to receive one.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submits a prompt for generation.
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, TransportFailure>;

    /// Requests a composite of the artifact into one scene.
    async fn render_scene(
        &self,
        request: &RenderSceneRequest,
    ) -> Result<RenderSceneResponse, TransportFailure>;

    /// Queries backend availability. Informational only.
    async fn health(&self) -> Result<HealthResponse, TransportFailure>;

    /// Dispatches the teardown notification without waiting for an answer.
    ///
    /// Implementations must not block and must swallow delivery failures.
    fn send_shutdown_beacon(&self);
}
