//! ATCS Monitor Session Tracking
//!
//! The embedded dashboard page runs through a small load/error/navigation
//! state machine:
//! - The browser engine emits lifecycle events (load start, load end,
//!   navigation change, HTTP error, network failure)
//! - A single reducer folds them into a `SessionState`
//! - User actions (reload, go-back) go through `SessionController`,
//!   which talks to the engine behind the `PageHost` capability trait

mod controller;
mod error;
mod event;
mod state;

pub use controller::{PageHost, SessionController};
pub use error::SessionError;
pub use event::LifecycleEvent;
pub use state::{SessionPhase, SessionState, LOAD_FAILURE_FALLBACK};

pub type Result<T> = std::result::Result<T, SessionError>;
