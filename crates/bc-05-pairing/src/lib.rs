//! # BC-05 Pairing Negotiator
//!
//! Drives the registration → token-generation → partner-discovery
//! handshake and hands off to the sync engine once partnered.
//!
//! ## State machine
//!
//! ```text
//! REGISTERING → TOKEN_READY → PAIRING → BLOCKS_REQUESTED → SYNCING → READY
//!                                ↑                            │
//!                                └───────── SYNC_FAILED ──────┘
//! ```
//!
//! Every network step retries independently after a fixed delay, with
//! no exponential backoff and no retry cap: this is a long-lived
//! background task with no caller waiting on a deadline. The only
//! explicit timeout is the partner deadline after a blocks request:
//! a silent partner is abandoned and a new one requested.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod negotiator;
pub mod state;

// Re-exports
pub use config::PairingConfig;
pub use negotiator::{PairedNode, PairingNegotiator};
pub use state::PairingState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
