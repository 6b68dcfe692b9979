//! # Transport Types
//!
//! Request and response bodies for the router API.

use serde::{Deserialize, Serialize};
use shared_types::NodeIdentity;

/// Response body of `GET /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Opaque identity string; doubles as the node's queue address.
    pub identity: String,
    /// Epoch counter bounding auth-token validity.
    pub epoch: u64,
}

impl From<RegisterResponse> for NodeIdentity {
    fn from(resp: RegisterResponse) -> Self {
        NodeIdentity::new(resp.identity, resp.epoch)
    }
}

/// Response body of `GET /pair`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResponse {
    /// Queue address of the assigned partner node.
    pub address: String,
}

/// Identity and derived token presented on every authenticated call.
///
/// Sent as `identity`/`token` query parameters on GETs and as body
/// fields on `POST /enqueue`. The token is derived by the identity
/// manager and is only valid within the current epoch window, so this
/// pair is rebuilt per call rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterAuth {
    /// The node's identity string.
    pub identity: String,
    /// Auth token for the current epoch.
    pub token: String,
}

impl RouterAuth {
    /// Build an auth pair.
    pub fn new(identity: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            token: token.into(),
        }
    }
}

/// Request body of `POST /enqueue`.
///
/// `data` carries the JSON-encoded relay message as a string, matching
/// the wire protocol (the envelope is encoded separately from the
/// enqueue body itself).
#[derive(Debug, Clone, Serialize)]
pub struct EnqueueRequest {
    /// Sender identity.
    pub identity: String,
    /// Sender auth token.
    pub token: String,
    /// Recipient queue address.
    pub address: String,
    /// JSON-encoded [`shared_types::RelayMessage`].
    pub data: String,
}
