//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] atcs_session::SessionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Monitor not initialized")]
    NotInitialized,
}
