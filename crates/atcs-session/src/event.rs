//! Browser engine lifecycle events
//!
//! The engine is a black box that eventually emits one of these for the
//! current navigation. Events are transient values; the reducer consumes
//! them and nothing retains them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The engine started loading the target page
    LoadStarted,
    /// The engine finished the current load attempt
    LoadFinished,
    /// The engine navigated; reports whether backward history exists
    NavigationChanged { can_go_back: bool },
    /// The remote server answered with an HTTP status
    HttpError { status: u16 },
    /// The engine failed to load the page at the network level
    LoadFailed { description: Option<String> },
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::LoadStarted => "load_started",
            LifecycleEvent::LoadFinished => "load_finished",
            LifecycleEvent::NavigationChanged { .. } => "navigation_changed",
            LifecycleEvent::HttpError { .. } => "http_error",
            LifecycleEvent::LoadFailed { .. } => "load_failed",
        }
    }
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
