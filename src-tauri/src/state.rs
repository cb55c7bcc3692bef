//! Application state management

use atcs_core::{Config, Monitor, SplashTimer};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    monitor: Monitor,
    /// Pending splash countdown, if any; replaced handles are aborted on drop
    splash: Arc<RwLock<Option<SplashTimer>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            monitor: Monitor::new(Config::default()),
            splash: Arc::new(RwLock::new(None)),
        }
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Install a new splash timer, cancelling any pending one
    pub fn store_splash(&self, timer: SplashTimer) {
        *self.splash.write() = Some(timer);
    }

    /// Tear down the pending splash timer so its transition never fires
    pub fn cancel_splash(&self) {
        if let Some(timer) = self.splash.write().take() {
            timer.cancel();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
