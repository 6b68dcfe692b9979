//! # Identity Manager

use bc_01_transport::{RegisterResponse, RouterAuth};
use shared_types::{sha256_hex, NodeIdentity};

/// Holds the node identity and derives epoch-bound auth tokens.
#[derive(Debug, Clone)]
pub struct IdentityManager {
    identity: NodeIdentity,
}

impl IdentityManager {
    /// Create a manager around a router-issued identity.
    pub fn new(identity: NodeIdentity) -> Self {
        Self { identity }
    }

    /// Create a manager from the raw `/register` response.
    pub fn from_registration(resp: RegisterResponse) -> Self {
        Self::new(resp.into())
    }

    /// The node's identity string (also its queue address).
    pub fn id(&self) -> &str {
        &self.identity.id
    }

    /// Current epoch.
    pub fn epoch(&self) -> u64 {
        self.identity.epoch
    }

    /// Derive the auth token for the current epoch:
    /// `hex(sha256("{id}-{epoch}"))`.
    ///
    /// Recomputed on every call; never cached across epoch changes.
    pub fn token(&self) -> String {
        sha256_hex(&format!("{}-{}", self.identity.id, self.identity.epoch))
    }

    /// Identity + token pair for an authenticated router call.
    pub fn auth(&self) -> RouterAuth {
        RouterAuth::new(self.identity.id.clone(), self.token())
    }

    /// Advance the epoch on the router's time-synchronization signal.
    /// The next `token()` call reflects the new epoch.
    pub fn advance_epoch(&mut self) {
        self.identity.epoch += 1;
        tracing::debug!(epoch = self.identity.epoch, "Epoch advanced");
    }
}
