//! ATCS Monitor Core
//!
//! Central coordination layer for the ATCS Monitor shell. Owns the
//! session state of the embedded dashboard page, the active screen, and
//! the fixed application configuration. The webview is purely a renderer.

mod config;
mod error;
mod monitor;
mod splash;
mod status;

pub use config::Config;
pub use error::CoreError;
pub use monitor::{Monitor, Screen};
pub use splash::SplashTimer;
pub use status::ConnectionStatus;

// Re-export the session machinery
pub use atcs_session::{
    LifecycleEvent, PageHost, SessionController, SessionError, SessionPhase, SessionState,
    LOAD_FAILURE_FALLBACK,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
