//! Error types for the papercut studio client core.
//!
//! Every failure mode of the workflow has its own type so callers can react
//! to each one distinctly; `StudioError` unifies them at the operation
//! boundary. All errors are terminal to the current operation only, never to
//! the session: the workflow stage is always left in a state the user can
//! retry from or reset via `to_input()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The main error type for studio operations.
#[derive(Debug, Error)]
pub enum StudioError {
    /// User input was rejected before any request was issued.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A workflow transition was attempted while its precondition did not hold.
    #[error("{0}")]
    Precondition(#[from] PreconditionError),

    /// The backend answered but reported that the operation could not run.
    #[error("{0}")]
    Logical(#[from] LogicalFailure),

    /// The request never produced a decodable answer.
    #[error("{0}")]
    Transport(#[from] TransportFailure),

    /// The artifact reference resolved but the asset itself failed to load.
    #[error("{0}")]
    AssetLoad(#[from] AssetLoadFailure),

    /// A download was requested with nothing available to save.
    #[error("{0}")]
    NothingToDownload(#[from] NothingToDownloadError),

    /// IO error while materializing a download.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    /// Returns the taxonomy bucket this error belongs to.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::Precondition(_) => FailureKind::Precondition,
            Self::Logical(_) => FailureKind::Logical,
            Self::Transport(_) => FailureKind::Transport,
            Self::AssetLoad(_) => FailureKind::AssetLoad,
            Self::NothingToDownload(_) => FailureKind::NothingToDownload,
            Self::Io(_) => FailureKind::Io,
        }
    }

    /// Returns true if the user can recover by simply retrying the operation.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Logical(_) | Self::Transport(_) | Self::AssetLoad(_)
        )
    }
}

/// Classification of a failure, used in summaries and sink events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rejected input, no request made.
    Validation,
    /// Blocked transition, no state change.
    Precondition,
    /// Backend responded with `success = false`.
    Logical,
    /// Network or decode failure.
    Transport,
    /// Asset bytes failed to resolve after a successful response.
    AssetLoad,
    /// Nothing available to download.
    NothingToDownload,
    /// Local filesystem failure.
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Precondition => write!(f, "precondition"),
            Self::Logical => write!(f, "logical"),
            Self::Transport => write!(f, "transport"),
            Self::AssetLoad => write!(f, "asset_load"),
            Self::NothingToDownload => write!(f, "nothing_to_download"),
            Self::Io => write!(f, "io"),
        }
    }
}

/// Error raised when user input fails validation.
///
/// No network call is made and no stage change happens.
#[derive(Debug, Clone, Error)]
#[error("validation failed: {message}")]
pub struct ValidationError {
    /// The error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error for an empty (after trimming) prompt.
    #[must_use]
    pub fn empty_prompt() -> Self {
        Self::new("prompt must not be empty")
    }
}

/// Error raised when a transition's precondition does not hold.
///
/// The transition performs no state change; the violation is surfaced to the
/// user through the view sink, not only to the log.
#[derive(Debug, Clone, Error)]
#[error("precondition violated in stage '{stage}': {message}")]
pub struct PreconditionError {
    /// The error message.
    pub message: String,
    /// The stage the workflow was in when the violation occurred.
    pub stage: String,
}

impl PreconditionError {
    /// Creates a new precondition error.
    #[must_use]
    pub fn new(message: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stage: stage.into(),
        }
    }
}

/// Error raised when the backend responds but reports the operation failed.
///
/// Recoverable by retry; the server-supplied message (when present) is shown
/// to the user verbatim.
#[derive(Debug, Clone, Error)]
#[error("{operation} reported failure: {}", message.as_deref().unwrap_or("no details provided"))]
pub struct LogicalFailure {
    /// The operation that failed (e.g. "generate").
    pub operation: String,
    /// The server-supplied failure message, if any.
    pub message: Option<String>,
}

impl LogicalFailure {
    /// Creates a new logical failure.
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: None,
        }
    }

    /// Attaches the server-supplied message.
    #[must_use]
    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Returns the message to show the user, falling back when the server
    /// supplied none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Error raised when a request fails at the transport layer.
///
/// Covers connection failures, bounded-wait timeouts, and undecodable bodies.
#[derive(Debug, Clone, Error)]
#[error("{operation} transport failure: {message}")]
pub struct TransportFailure {
    /// The operation that failed (e.g. "render_scene").
    pub operation: String,
    /// Description of the underlying failure.
    pub message: String,
}

impl TransportFailure {
    /// Creates a new transport failure.
    #[must_use]
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Error raised when an artifact reference resolved but the asset itself
/// could not be loaded.
///
/// Distinct from [`TransportFailure`]: the originating HTTP call succeeded.
#[derive(Debug, Clone, Error)]
#[error("asset failed to load from '{url}': {message}")]
pub struct AssetLoadFailure {
    /// The asset URL that failed.
    pub url: String,
    /// Description of the failure.
    pub message: String,
}

impl AssetLoadFailure {
    /// Creates a new asset load failure.
    #[must_use]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Error raised when a download is requested but no artifact or composite is
/// available to save.
#[derive(Debug, Clone, Error)]
#[error("nothing to download for {target}")]
pub struct NothingToDownloadError {
    /// Description of the requested download target.
    pub target: String,
}

impl NothingToDownloadError {
    /// Creates a new nothing-to-download error.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::empty_prompt();
        assert!(err.to_string().contains("prompt must not be empty"));
    }

    #[test]
    fn test_logical_failure_user_message() {
        let with_message =
            LogicalFailure::new("generate").with_message(Some("model offline".to_string()));
        assert_eq!(with_message.user_message("fallback"), "model offline");

        let without_message = LogicalFailure::new("generate");
        assert_eq!(without_message.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_studio_error_kind() {
        let err: StudioError = TransportFailure::new("generate", "connection refused").into();
        assert_eq!(err.kind(), FailureKind::Transport);
        assert!(err.is_retryable());

        let err: StudioError = ValidationError::empty_prompt().into();
        assert_eq!(err.kind(), FailureKind::Validation);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_failure_kind_serialize() {
        let json = serde_json::to_string(&FailureKind::AssetLoad).unwrap();
        assert_eq!(json, r#""asset_load""#);
    }

    #[test]
    fn test_precondition_error_carries_stage() {
        let err = PreconditionError::new("scene review requires an artifact", "input");
        assert!(err.to_string().contains("input"));
    }
}
