//! # Bookchain Node Runtime
//!
//! Wiring for the `bookchain-node` binary:
//!
//! - `config` - environment-driven [`config::NodeConfig`]
//! - `observers` - tracing-backed progress/event sinks for the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod observers;

pub use config::NodeConfig;
pub use observers::{LogEvents, LogProgress};
