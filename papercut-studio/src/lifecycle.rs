//! The page lifecycle signal agent.
//!
//! Distinguishes a genuine tab close from a reload as far as the platform
//! allows: the low-level unload signal fires for both, so a reload may
//! spuriously notify the backend of shutdown. That false positive is
//! accepted — a reload reconnects immediately — versus never notifying on a
//! real close.

use crate::backend::GenerationBackend;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Side channel attached to the page's own lifecycle events, independent of
/// the workflow stage machine.
pub struct LifecycleAgent {
    backend: Arc<dyn GenerationBackend>,
    page_unloading: AtomicBool,
}

impl LifecycleAgent {
    /// Creates a lifecycle agent over a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            page_unloading: AtomicBool::new(false),
        }
    }

    /// Handles a fresh page load: resets the unloading flag.
    pub fn page_loaded(&self) {
        self.page_unloading.store(false, Ordering::SeqCst);
        info!("page loaded, frontend ready");
    }

    /// Handles the page's about-to-unload signal.
    ///
    /// Sets the unloading flag and dispatches exactly one fire-and-forget
    /// teardown beacon per unload, however often the signal repeats. The
    /// dispatch never blocks and is never awaited: the page may terminate
    /// immediately after this handler returns.
    pub fn before_unload(&self) {
        if self.page_unloading.swap(true, Ordering::SeqCst) {
            debug!("unload signal repeated, beacon already dispatched");
            return;
        }

        self.backend.send_shutdown_beacon();
        debug!("shutdown beacon dispatched");
    }

    /// Handles a visibility change. Informational only.
    pub fn visibility_changed(&self, hidden: bool) {
        if hidden {
            debug!("page moved to the background");
        } else {
            debug!("page returned to the foreground");
        }
    }

    /// Returns true between the unload signal and the next page load.
    #[must_use]
    pub fn is_unloading(&self) -> bool {
        self.page_unloading.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBackend;

    #[tokio::test]
    async fn test_exactly_one_beacon_per_unload() {
        let backend = Arc::new(ScriptedBackend::new());
        let agent = LifecycleAgent::new(backend.clone());
        agent.page_loaded();
        assert!(!agent.is_unloading());

        agent.before_unload();
        agent.before_unload();
        agent.before_unload();

        assert!(agent.is_unloading());
        assert_eq!(backend.beacon_count(), 1);
    }

    #[tokio::test]
    async fn test_reload_resets_and_rearms() {
        let backend = Arc::new(ScriptedBackend::new());
        let agent = LifecycleAgent::new(backend.clone());

        // A reload fires the unload signal, then loads fresh.
        agent.before_unload();
        agent.page_loaded();
        assert!(!agent.is_unloading());

        // The next lifetime's close sends its own beacon.
        agent.before_unload();
        assert_eq!(backend.beacon_count(), 2);
    }

    #[tokio::test]
    async fn test_visibility_change_does_not_beacon() {
        let backend = Arc::new(ScriptedBackend::new());
        let agent = LifecycleAgent::new(backend.clone());

        agent.visibility_changed(true);
        agent.visibility_changed(false);
        assert_eq!(backend.beacon_count(), 0);
    }
}
