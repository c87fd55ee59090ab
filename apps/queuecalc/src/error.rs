//! # Application Errors
//!
//! Errors raised outside the engine. Engine failures are wrapped unchanged.

use queuecalc_core::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The engine rejected the request.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_error_message_passes_through() {
        let err: AppError = QueueError::MissingParameter("mu").into();
        assert_eq!(err.to_string(), "Missing parameter: mu");
    }
}
