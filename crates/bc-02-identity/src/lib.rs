//! # BC-02 Identity/Auth Manager
//!
//! Owns the node's router-issued identity and epoch, and derives the
//! epoch-bound auth token presented on every authenticated router call.
//!
//! The token is a pure function of identity and epoch and is recomputed
//! on every call rather than cached: the epoch may be advanced at any
//! time by the router's time-synchronization signal, and a token from a
//! stale epoch is rejected by the router.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod manager;

// Re-exports
pub use manager::IdentityManager;

use std::sync::Arc;

use parking_lot::RwLock;

/// Identity manager shared between the pairing negotiator, the sync
/// engine, and the block author. Reads dominate; writes happen only on
/// the epoch-advance signal.
pub type SharedIdentity = Arc<RwLock<IdentityManager>>;

/// Wrap an identity manager for sharing across tasks.
pub fn share_identity(manager: IdentityManager) -> SharedIdentity {
    Arc::new(RwLock::new(manager))
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
