//! # BC-03 Chain Store
//!
//! In-memory, append-only, hash-linked block sequence.
//!
//! Invariant: for every index `i > 0`,
//! `chain[i].hash == hex(sha256(canonical(chain[i-1])))`, and
//! `chain[0].hash == null`. The chain grows monotonically for the
//! session and is never truncated; an incoming batch either validates
//! against the local tail or is rejected from the first bad block
//! onward, keeping the validated prefix.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod invariants;
pub mod store;

// Re-exports
pub use errors::ChainError;
pub use invariants::verify_links;
pub use store::{BatchOutcome, ChainStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
