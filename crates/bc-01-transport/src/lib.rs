//! # BC-01 Router Transport
//!
//! HTTP client for the relay router API. The router is an external
//! collaborator providing identity issuance, partner pairing, and a
//! per-address message queue:
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | `/register` | GET | idempotent, returns `{identity, epoch}` |
//! | `/pair` | GET | authenticated, returns the assigned partner |
//! | `/enqueue` | POST | queue a relay message for a recipient |
//! | `/dequeue` | GET | authenticated poll; `404` means empty queue |
//!
//! This crate only executes single round-trips and maps responses to
//! typed results. Retry policy belongs to the callers (pairing, sync,
//! author), which each retry at their own fixed delay.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod http;
pub mod types;

// Re-exports
pub use client::RouterClient;
pub use error::RouterError;
pub use http::HttpRouterClient;
pub use types::{EnqueueRequest, PairResponse, RegisterResponse, RouterAuth};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
