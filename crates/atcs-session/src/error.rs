//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Page host error: {0}")]
    Host(String),

    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),
}

impl SessionError {
    pub fn host(message: impl Into<String>) -> Self {
        SessionError::Host(message.into())
    }
}
