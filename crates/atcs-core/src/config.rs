//! Application configuration
//!
//! Everything here is fixed at build time: the shell displays exactly one
//! remote dashboard and offers one outbound link. No environment
//! overrides, no persisted settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The remote CCTV monitoring dashboard rendered in the content webview
pub const DASHBOARD_URL: &str = "https://cctv-monitoring-six.vercel.app/";

/// Project repository, opened from the info screen via the platform opener
pub const REPOSITORY_URL: &str = "https://github.com/balalii/cctv-monitoring";

/// How long the splash screen stays up before the main view takes over
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the embedded dashboard
    pub dashboard_url: String,
    /// Outbound repository link
    pub repository_url: String,
    /// Splash screen duration in milliseconds
    pub splash_duration_ms: u64,
}

impl Config {
    /// User agent presented to the remote server with every request
    ///
    /// Two broad client categories: handheld-touch targets get a mobile
    /// string, everything else a desktop one.
    pub fn user_agent() -> &'static str {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            "Mozilla/5.0 (Linux; Android 10; SM-G975F) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.120 Mobile Safari/537.36"
        } else {
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.120 Safari/537.36"
        }
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard_url: DASHBOARD_URL.to_string(),
            repository_url: REPOSITORY_URL.to_string(),
            splash_duration_ms: SPLASH_DURATION.as_millis() as u64,
        }
    }
}
