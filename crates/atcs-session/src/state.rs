//! Session state machine for the embedded dashboard page
//!
//! ```text
//! Loading
//!   ↓ load finished
//! Ready
//!   ↓ http error (>= 400) / network failure
//! Errored
//!   ↓ reload / load started
//! Loading
//! ```
//!
//! The reducer is total: every event is accepted in every phase, and the
//! handlers tolerate arbitrary interleaving. Error state is sticky — a
//! late `LoadFinished` never overrides `Errored`; only an explicit
//! reload or a fresh load start leaves it.

use serde::{Deserialize, Serialize};

use crate::event::LifecycleEvent;

/// Detail string used when the engine reports a failure without one
pub const LOAD_FAILURE_FALLBACK: &str = "Failed to load page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// The page is being fetched/rendered
    Loading,
    /// The page is loaded and interactive
    Ready,
    /// The last load attempt failed; the page is not interactive
    Errored,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Loading => "loading",
            SessionPhase::Ready => "ready",
            SessionPhase::Errored => "errored",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loading" => Ok(SessionPhase::Loading),
            "ready" => Ok(SessionPhase::Ready),
            "errored" => Ok(SessionPhase::Errored),
            _ => Err(format!("Unknown session phase: {}", s)),
        }
    }
}

/// Tracked state of the embedded page session
///
/// Exactly one phase is active at any time. Mutated only by the
/// lifecycle-event handlers below and by `SessionController::reload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current load phase
    pub phase: SessionPhase,
    /// Whether the engine has backward history (meaningful outside `Errored`)
    pub can_go_back: bool,
    /// Human-readable failure detail; always set while `Errored`
    pub error_detail: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Loading,
            can_go_back: false,
            error_detail: None,
        }
    }

    /// Fold one engine event into the state
    pub fn apply(&mut self, event: LifecycleEvent) {
        tracing::debug!(event = %event, phase = %self.phase, "Session lifecycle event");

        match event {
            LifecycleEvent::LoadStarted => self.on_load_start(),
            LifecycleEvent::LoadFinished => self.on_load_end(),
            LifecycleEvent::NavigationChanged { can_go_back } => {
                self.on_navigation_change(can_go_back)
            }
            LifecycleEvent::HttpError { status } => self.on_http_error(status),
            LifecycleEvent::LoadFailed { description } => self.on_network_error(description),
        }
    }

    /// A new load attempt began; clears any previous error
    pub fn on_load_start(&mut self) {
        self.phase = SessionPhase::Loading;
        self.error_detail = None;
    }

    /// The load attempt finished; errors reported during the attempt win
    pub fn on_load_end(&mut self) {
        if self.phase != SessionPhase::Errored {
            self.phase = SessionPhase::Ready;
        }
    }

    /// Navigation state changed; tracked independently of the phase
    pub fn on_navigation_change(&mut self, can_go_back: bool) {
        self.can_go_back = can_go_back;
    }

    /// Server answered with a status code; 3xx and below are ignored
    pub fn on_http_error(&mut self, status: u16) {
        if status >= 400 {
            self.phase = SessionPhase::Errored;
            self.error_detail = Some(format!("HTTP Error: {}", status));
        }
    }

    /// Engine-level load failure (DNS, TLS, connectivity, ...)
    pub fn on_network_error(&mut self, description: Option<String>) {
        self.phase = SessionPhase::Errored;
        self.error_detail = Some(
            description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| LOAD_FAILURE_FALLBACK.to_string()),
        );
    }

    /// Reset performed by a user-initiated reload
    pub fn begin_loading(&mut self) {
        self.phase = SessionPhase::Loading;
        self.error_detail = None;
    }

    pub fn is_errored(&self) -> bool {
        self.phase == SessionPhase::Errored
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
