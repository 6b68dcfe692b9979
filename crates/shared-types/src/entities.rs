//! # Core Domain Entities
//!
//! The block type that forms the bookchain, and the identity the router
//! assigns to a node at registration.

use serde::{Deserialize, Serialize};

use crate::hashing::sha256_hex;

/// A single entry in the bookchain.
///
/// Blocks are immutable once appended. `hash` is `None` only for the
/// genesis block; for every later block it must equal the link digest
/// of the block immediately preceding it in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Free-form block content.
    pub text: String,
    /// Link to the previous block: its canonical-string digest, or
    /// `None` for the genesis block (serialized as JSON `null`).
    pub hash: Option<String>,
    /// ISO-8601 timestamp captured when the block was authored.
    pub timestamp: String,
}

impl Block {
    /// Create a block linking to a previous block's digest.
    pub fn new(
        text: impl Into<String>,
        hash: Option<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            hash,
            timestamp: timestamp.into(),
        }
    }

    /// Create a genesis block (no previous link).
    pub fn genesis(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(text, None, timestamp)
    }

    /// Whether this block carries no previous link.
    pub fn is_genesis(&self) -> bool {
        self.hash.is_none()
    }

    /// Canonical string representation used for link digests:
    /// the block's own hash (or the literal `"null"`), then its text,
    /// then its timestamp, concatenated without separators.
    pub fn canonical_string(&self) -> String {
        let hash = self.hash.as_deref().unwrap_or("null");
        format!("{}{}{}", hash, self.text, self.timestamp)
    }

    /// The digest a successor block must carry to link to this one.
    pub fn link_hash(&self) -> String {
        sha256_hex(&self.canonical_string())
    }
}

/// Identity assigned by the router at registration.
///
/// Owned exclusively by one node for the session lifetime. The epoch is
/// a router-issued counter bounding auth-token validity; it advances on
/// the router's time-synchronization signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeIdentity {
    /// Opaque identifier; doubles as the node's queue address.
    pub id: String,
    /// Epoch counter bounding token validity.
    pub epoch: u64,
}

impl NodeIdentity {
    /// Create an identity from the router's registration response.
    pub fn new(id: impl Into<String>, epoch: u64) -> Self {
        Self {
            id: id.into(),
            epoch,
        }
    }
}
