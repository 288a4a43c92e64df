//! View sink trait and implementations.

use super::ViewEvent;
use async_trait::async_trait;
use tracing::{debug, info, warn, Level};

/// Trait for sinks that receive view projection events.
///
/// The rendering surface implements this to mirror the view state; the
/// built-in implementations cover headless use (no-op), diagnostics
/// (logging), and tests (collecting).
#[async_trait]
pub trait ViewSink: Send + Sync {
    /// Delivers an event asynchronously.
    async fn emit(&self, event: &ViewEvent);

    /// Delivers an event without suspending.
    ///
    /// Used from synchronous transition code. This method must never fail;
    /// delivery problems are the sink's to swallow.
    fn try_emit(&self, event: &ViewEvent);
}

/// A sink that discards all events.
///
/// The default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpViewSink;

#[async_trait]
impl ViewSink for NoOpViewSink {
    async fn emit(&self, _event: &ViewEvent) {
        // Intentionally empty - discards all events
    }

    fn try_emit(&self, _event: &ViewEvent) {
        // Intentionally empty - discards all events
    }
}

/// A sink that logs events through the tracing framework.
#[derive(Debug, Clone)]
pub struct LoggingViewSink {
    /// The log level to use for non-error events.
    level: Level,
}

impl Default for LoggingViewSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingViewSink {
    /// Creates a new logging sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    fn log_event(&self, event: &ViewEvent) {
        // User-facing errors always log at warn regardless of sink level.
        if let ViewEvent::UserError { message } = event {
            warn!(event_kind = %event.kind(), "User error: {message}");
            return;
        }

        match self.level {
            Level::DEBUG => {
                debug!(event_kind = %event.kind(), event = ?event, "View: {}", event.kind());
            }
            _ => {
                info!(event_kind = %event.kind(), event = ?event, "View: {}", event.kind());
            }
        }
    }
}

#[async_trait]
impl ViewSink for LoggingViewSink {
    async fn emit(&self, event: &ViewEvent) {
        self.log_event(event);
    }

    fn try_emit(&self, event: &ViewEvent) {
        self.log_event(event);
    }
}

/// A collecting sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingViewSink {
    events: parking_lot::RwLock<Vec<ViewEvent>>,
}

impl CollectingViewSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    #[must_use]
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.read().clone()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Clears all collected events.
    pub fn clear(&self) {
        self.events.write().clear();
    }

    /// Returns events whose kind starts with the given prefix.
    #[must_use]
    pub fn events_of_kind(&self, kind_prefix: &str) -> Vec<ViewEvent> {
        self.events
            .read()
            .iter()
            .filter(|event| event.kind().starts_with(kind_prefix))
            .cloned()
            .collect()
    }

    /// Returns the positions of the first event of each given kind, in the
    /// order requested, for ordering assertions.
    #[must_use]
    pub fn first_positions(&self, kinds: &[&str]) -> Vec<Option<usize>> {
        let events = self.events.read();
        kinds
            .iter()
            .map(|kind| events.iter().position(|event| event.kind() == *kind))
            .collect()
    }
}

#[async_trait]
impl ViewSink for CollectingViewSink {
    async fn emit(&self, event: &ViewEvent) {
        self.events.write().push(event.clone());
    }

    fn try_emit(&self, event: &ViewEvent) {
        self.events.write().push(event.clone());
    }
}
