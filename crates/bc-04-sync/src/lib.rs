//! # BC-04 Sync Engine
//!
//! The message-relay consumption loop, chain ingestion, and block
//! authoring.
//!
//! ## Module Structure
//!
//! ```text
//! bc-04-sync/
//! ├── state.rs     # NodeState + NodeHandle: chain, received-blocks flag, gate
//! ├── engine.rs    # SyncEngine: fixed-interval dequeue/dispatch loop
//! ├── author.rs    # BlockAuthor: timestamp, link, enqueue ADD_BLOCK to self
//! ├── events.rs    # NodeEvents + ProgressSink inbound callback ports
//! ├── config.rs    # SyncConfig
//! └── testing.rs   # ScriptedRouter for unit tests
//! ```
//!
//! ## Single-flight processing
//!
//! At most one relay message (or local submit) is acted on at a time
//! per node. The gate in [`NodeHandle`] is a one-permit semaphore
//! guarding the dequeue-and-dispatch critical section: a poll tick that
//! cannot claim the permit skips entirely (skipped ticks are not
//! queued), the block author waits its turn instead of interleaving,
//! and the permit is released on every exit path, success or failure.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod author;
pub mod config;
pub mod engine;
pub mod events;
pub mod state;
pub mod testing;

// Re-exports
pub use author::BlockAuthor;
pub use config::SyncConfig;
pub use engine::SyncEngine;
pub use events::{NodeEvents, NullEvents, NullProgress, ProgressSink};
pub use state::{shared_node, NodeHandle, NodeState, SharedNode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
