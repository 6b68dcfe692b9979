//! # CLI Observers
//!
//! Tracing-backed implementations of the core's callback ports. The
//! core treats both as fire-and-forget collaborators; here they just
//! surface milestones and new blocks in the log stream.

use bc_04_sync::{NodeEvents, ProgressSink};
use tracing::info;

/// Progress sink that logs each pairing/sync milestone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&self, fraction: f64, message: &str) {
        info!(percent = (fraction * 100.0) as u32, "{message}");
    }
}

/// Events sink that logs every appended block.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEvents;

impl NodeEvents for LogEvents {
    fn on_new_block(&self) {
        info!("New block appended to local chain");
    }
}
