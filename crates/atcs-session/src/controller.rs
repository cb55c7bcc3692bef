//! User-facing session actions
//!
//! The controller owns no page state of its own; it mutates the shared
//! `SessionState` and forwards navigation requests to the engine behind
//! the `PageHost` capability trait. Reload is the sole recovery path out
//! of an errored session.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::state::SessionState;
use crate::Result;

/// Minimal capability surface of the embedded browser engine
///
/// The real implementation wraps a platform webview; tests use an
/// in-memory fake. The engine is otherwise opaque — it answers these
/// requests and eventually emits lifecycle events on its own schedule.
pub trait PageHost {
    /// Reload the current target page
    fn reload(&self) -> Result<()>;

    /// Navigate one step back in the engine's history
    fn go_back(&self) -> Result<()>;

    /// Point the engine at a new target URL
    fn navigate(&self, url: &str) -> Result<()>;

    /// The URL the engine is currently pointed at
    fn target_url(&self) -> String;
}

/// Drives reload/back affordances against a `PageHost`
pub struct SessionController<H: PageHost> {
    host: H,
    state: Arc<RwLock<SessionState>>,
}

impl<H: PageHost> SessionController<H> {
    pub fn new(host: H, state: Arc<RwLock<SessionState>>) -> Self {
        Self { host, state }
    }

    /// Reload the page and reset the session to a fresh loading state
    ///
    /// Valid in any phase, including `Errored`. The state reset happens
    /// even though the engine will normally also emit a load-start event;
    /// the reducer tolerates the duplicate.
    pub fn reload(&self) -> Result<()> {
        self.host.reload()?;

        let mut state = self.state.write();
        state.begin_loading();

        tracing::info!(url = %self.host.target_url(), "Session reload requested");
        Ok(())
    }

    /// Navigate backward; guarded no-op when no backward history exists
    ///
    /// Does not touch the phase — the engine's subsequent lifecycle
    /// events drive any phase change.
    pub fn go_back(&self) -> Result<()> {
        if !self.state.read().can_go_back {
            tracing::debug!("Back navigation ignored, no backward history");
            return Ok(());
        }

        self.host.go_back()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionPhase;
    use crate::LifecycleEvent;

    /// In-memory page host recording the calls it receives
    struct FakeHost {
        reloads: RwLock<u32>,
        backs: RwLock<u32>,
        url: RwLock<String>,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                reloads: RwLock::new(0),
                backs: RwLock::new(0),
                url: RwLock::new("https://example.com/".to_string()),
            }
        }
    }

    impl PageHost for FakeHost {
        fn reload(&self) -> Result<()> {
            *self.reloads.write() += 1;
            Ok(())
        }

        fn go_back(&self) -> Result<()> {
            *self.backs.write() += 1;
            Ok(())
        }

        fn navigate(&self, url: &str) -> Result<()> {
            *self.url.write() = url.to_string();
            Ok(())
        }

        fn target_url(&self) -> String {
            self.url.read().clone()
        }
    }

    fn controller_with_state(state: SessionState) -> SessionController<FakeHost> {
        SessionController::new(FakeHost::new(), Arc::new(RwLock::new(state)))
    }

    #[test]
    fn test_reload_resets_any_phase_to_loading() {
        // Idempotency on phase: reload from every phase lands in Loading
        for initial in [
            SessionState::new(),
            {
                let mut s = SessionState::new();
                s.apply(LifecycleEvent::LoadFinished);
                s
            },
            {
                let mut s = SessionState::new();
                s.apply(LifecycleEvent::HttpError { status: 503 });
                s
            },
        ] {
            let controller = controller_with_state(initial);
            controller.reload().unwrap();

            let state = controller.state.read();
            assert_eq!(state.phase, SessionPhase::Loading);
            assert!(state.error_detail.is_none());
            assert_eq!(*controller.host().reloads.read(), 1);
        }
    }

    #[test]
    fn test_reload_recovers_from_network_error() {
        // Scenario C
        let mut state = SessionState::new();
        state.apply(LifecycleEvent::LoadStarted);
        state.apply(LifecycleEvent::LoadFailed { description: None });

        let controller = controller_with_state(state);
        controller.reload().unwrap();

        let state = controller.state.read();
        assert_eq!(state.phase, SessionPhase::Loading);
        assert!(state.error_detail.is_none());
    }

    #[test]
    fn test_go_back_is_identity_without_history() {
        let controller = controller_with_state(SessionState::new());
        let before = controller.state.read().clone();

        controller.go_back().unwrap();

        assert_eq!(*controller.state.read(), before);
        assert_eq!(*controller.host().backs.read(), 0);
    }

    #[test]
    fn test_go_back_reaches_host_with_history() {
        let mut state = SessionState::new();
        state.apply(LifecycleEvent::NavigationChanged { can_go_back: true });

        let controller = controller_with_state(state);
        controller.go_back().unwrap();

        assert_eq!(*controller.host().backs.read(), 1);
        // Phase untouched; lifecycle events from the engine drive it
        assert_eq!(controller.state.read().phase, SessionPhase::Loading);
    }
}
