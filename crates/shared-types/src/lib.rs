//! # Shared Types
//!
//! Core entities shared by every Bookchain subsystem.
//!
//! ## Clusters
//!
//! - **Chain**: [`Block`] and its canonical string / link digest rules
//! - **Identity**: [`NodeIdentity`] issued by the router at registration
//! - **Messaging**: [`RelayMessage`], the wire envelope exchanged through
//!   the router's per-address queues
//! - **Hashing**: [`sha256_hex`], the digest every link and auth token
//!   is derived from

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod envelope;
pub mod hashing;

// Re-exports
pub use entities::{Block, NodeIdentity};
pub use envelope::RelayMessage;
pub use hashing::sha256_hex;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
