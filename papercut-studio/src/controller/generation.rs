//! The generation orchestrator.
//!
//! Drives one prompt submission end to end: validation, the stage change,
//! the pending indicator, the request itself, progress-step relay, and the
//! image-load confirmation sub-step that keeps the indicator up until the
//! artifact actually renders rather than merely until the HTTP call returns.

use super::StudioController;
use crate::backend::GenerateRequest;
use crate::errors::{LogicalFailure, PreconditionError, StudioError};
use crate::utils::normalize_prompt;
use crate::view::ViewEvent;
use tracing::{info, warn};

pub(crate) const MSG_PREPARING: &str = "Preparing generation...";
pub(crate) const MSG_GENERATION_FAILED: &str = "Generation failed, please try again";
pub(crate) const MSG_NETWORK_ERROR: &str =
    "Network error, please check the connection and try again";
pub(crate) const MSG_RENDER_FAILED: &str = "Image failed to load, please try again";

impl StudioController {
    /// Submits a prompt for generation.
    ///
    /// Effects, in order: the prompt is recorded into the active artifact
    /// (overwriting any previous one), the workflow moves to the result
    /// stage, the pending indicator appears, and one request is issued.
    /// Progress steps from the backend replace any prior list and are
    /// display-only. On a successful response the pending indicator is held
    /// until the artifact bytes are confirmed to resolve.
    ///
    /// At most one request is in flight per invocation; `&mut self` makes
    /// overlapping invocations a compile-time impossibility, matching the
    /// caller-must-prevent-duplicates contract.
    ///
    /// # Errors
    ///
    /// - [`crate::errors::ValidationError`] for an empty prompt: no request,
    ///   no stage change.
    /// - [`crate::errors::PreconditionError`] when not on the input stage.
    /// - [`LogicalFailure`], [`crate::errors::TransportFailure`], or
    ///   [`crate::errors::AssetLoadFailure`] after the failure has been
    ///   reflected into the pending indicator; all three are recoverable by
    ///   retry via `to_input()`.
    pub async fn generate(&mut self, prompt: &str) -> Result<(), StudioError> {
        let prompt = normalize_prompt(prompt)?;

        let stage = self.state().stage();
        if !stage.is_input() {
            return Err(PreconditionError::new(
                "generation starts from the input stage",
                stage.to_string(),
            )
            .into());
        }

        self.state_mut().artifact_mut().begin(prompt.clone());
        self.to_result()?;
        self.state_mut().begin_pending(MSG_PREPARING);
        self.sink()
            .emit(&ViewEvent::PendingStarted {
                message: MSG_PREPARING.to_string(),
            })
            .await;

        let request = GenerateRequest::new(prompt);
        info!(prompt = %request.prompt, "submitting generation request");

        let response = match self.backend().generate(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "generation request failed in transport");
                self.set_pending_failure(MSG_NETWORK_ERROR.to_string()).await;
                return Err(err.into());
            }
        };

        // Steps are relayed on success and failure alike.
        if !response.steps.is_empty() {
            self.state_mut().set_progress_steps(response.steps.clone());
            self.sink()
                .emit(&ViewEvent::ProgressSteps {
                    steps: response.steps.clone(),
                })
                .await;
        }

        if !response.success {
            let failure = LogicalFailure::new("generate").with_message(response.message);
            let message = failure.user_message(MSG_GENERATION_FAILED);
            warn!(%message, "generation reported failure");
            self.set_pending_failure(message).await;
            return Err(failure.into());
        }

        let Some(image_url) = response.image_url else {
            let failure = LogicalFailure::new("generate")
                .with_message(Some("response carried no image reference".to_string()));
            warn!("generation succeeded without an image reference");
            self.set_pending_failure(failure.user_message(MSG_GENERATION_FAILED))
                .await;
            return Err(failure.into());
        };

        // State is written before the pending indicator clears.
        self.state_mut().artifact_mut().set_url(image_url.clone());
        self.sink()
            .emit(&ViewEvent::ArtifactUpdated {
                url: image_url.clone(),
            })
            .await;

        // Load confirmation: completion is the image rendering, not the
        // HTTP call returning.
        match self.assets().fetch(&image_url).await {
            Ok(_) => {
                self.state_mut().clear_pending();
                self.sink().emit(&ViewEvent::PendingCleared).await;
                info!(url = %image_url, "artifact rendered");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "artifact failed to render");
                self.set_pending_failure(MSG_RENDER_FAILED.to_string()).await;
                Err(err.into())
            }
        }
    }

    /// Leaves the pending indicator up, showing a failure message the user
    /// can react to.
    async fn set_pending_failure(&mut self, message: String) {
        self.state_mut().set_pending_message(message.clone());
        self.sink()
            .emit(&ViewEvent::PendingMessage { message })
            .await;
    }
}
