//! View state and its projection seam.
//!
//! [`ViewState`] is the single source of truth for everything the page shows;
//! rendering is a pure projection of it, driven by the typed [`ViewEvent`]s a
//! [`ViewSink`] receives. The DOM (or any other surface) never holds state of
//! its own.

mod event;
mod sink;
mod state;

pub use event::ViewEvent;
pub use sink::{CollectingViewSink, LoggingViewSink, NoOpViewSink, ViewSink};
pub use state::{PendingState, ViewState};
