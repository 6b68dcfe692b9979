//! # Transport Errors
//!
//! Failure taxonomy for router calls. Everything except [`RouterError::EmptyQueue`]
//! is transient from the node's point of view: callers retry after a
//! fixed delay and never surface these as fatal.

use thiserror::Error;

/// Errors that can occur when communicating with the router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The HTTP round-trip itself failed (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The router answered with a non-success status.
    #[error("router returned status {status} for {path}")]
    Status {
        /// Request path, for logging.
        path: String,
        /// HTTP status code.
        status: u16,
    },

    /// `/dequeue` found no pending message. An expected steady-state
    /// poll outcome, not a failure.
    #[error("message queue is empty")]
    EmptyQueue,

    /// The response body could not be decoded.
    #[error("failed to decode router response: {0}")]
    Decode(String),
}

impl RouterError {
    /// Whether this is the expected empty-queue poll outcome.
    pub fn is_empty_queue(&self) -> bool {
        matches!(self, Self::EmptyQueue)
    }
}
