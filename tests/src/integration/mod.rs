//! # Integration Tests
//!
//! Cross-crate choreography: real sync engines, negotiators, and
//! authors wired to the in-memory [`crate::mock_router::MockRouter`].

pub mod auth_flow;
pub mod chain_exchange;
pub mod pairing_flow;
pub mod wire_format;
