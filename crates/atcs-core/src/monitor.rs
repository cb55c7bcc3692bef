//! Main application state container
//!
//! The shell owns all state; the webviews are purely renderers. The
//! `Monitor` holds the embedded page's session state and the active
//! screen, and hands out the shared session handle the controller and
//! the lifecycle-event plumbing both write through.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use atcs_session::{LifecycleEvent, SessionState};

use crate::config::Config;

/// Which top-level screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Timed splash shown at startup
    Splash,
    /// Main tabbed view (dashboard + info)
    Main,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Main => "main",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main monitor instance
pub struct Monitor {
    /// Configuration
    config: Config,
    /// Tracked state of the embedded dashboard session
    session: Arc<RwLock<SessionState>>,
    /// Currently active screen
    active_screen: Arc<RwLock<Screen>>,
}

impl Monitor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Arc::new(RwLock::new(SessionState::new())),
            active_screen: Arc::new(RwLock::new(Screen::Splash)),
        }
    }

    /// Fold an engine lifecycle event into the session state
    pub fn handle_event(&self, event: LifecycleEvent) {
        self.session.write().apply(event);
    }

    /// Snapshot of the current session state
    pub fn session_state(&self) -> SessionState {
        self.session.read().clone()
    }

    /// Shared handle for the controller and the event plumbing
    pub fn session_handle(&self) -> Arc<RwLock<SessionState>> {
        Arc::clone(&self.session)
    }

    pub fn active_screen(&self) -> Screen {
        *self.active_screen.read()
    }

    /// Splash expired (or was skipped); the main view takes over
    pub fn enter_main(&self) {
        *self.active_screen.write() = Screen::Main;
        tracing::info!("Entered main view");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Monitor {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: Arc::clone(&self.session),
            active_screen: Arc::clone(&self.active_screen),
        }
    }
}
