//! # Router Client Port
//!
//! Outbound port over the router API. The production adapter is
//! [`crate::HttpRouterClient`]; tests substitute in-memory routers.

use async_trait::async_trait;
use shared_types::RelayMessage;

use crate::error::RouterError;
use crate::types::{PairResponse, RegisterResponse, RouterAuth};

/// Router API - outbound port.
///
/// One method per router endpoint. Implementations perform a single
/// round-trip per call; they never retry internally.
#[async_trait]
pub trait RouterClient: Send + Sync {
    /// `GET /register`: obtain an identity and epoch. Idempotent, safe
    /// to retry.
    async fn register(&self) -> Result<RegisterResponse, RouterError>;

    /// `GET /pair`: request a partner address, authenticated.
    async fn pair(&self, auth: &RouterAuth) -> Result<PairResponse, RouterError>;

    /// `POST /enqueue`: queue a relay message for `recipient`.
    async fn enqueue(
        &self,
        auth: &RouterAuth,
        recipient: &str,
        message: &RelayMessage,
    ) -> Result<(), RouterError>;

    /// `GET /dequeue`: pop the next message addressed to this node.
    ///
    /// Returns [`RouterError::EmptyQueue`] when the queue is empty
    /// (the router signals this with HTTP 404).
    async fn dequeue(&self, auth: &RouterAuth) -> Result<RelayMessage, RouterError>;
}
