//! # Sync Configuration

use std::time::Duration;

/// Configuration for the sync engine and block author.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Interval between dequeue poll ticks.
    pub poll_interval: Duration,

    /// Fixed delay before retrying a failed `RESPOND_BLOCKS` enqueue.
    pub reply_retry_delay: Duration,

    /// Fixed delay before retrying a failed `ADD_BLOCK` enqueue.
    pub submit_retry_delay: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            reply_retry_delay: Duration::from_millis(500),
            submit_retry_delay: Duration::from_millis(500),
        }
    }
}

impl SyncConfig {
    /// Create a config for testing (short delays).
    pub fn for_testing() -> Self {
        Self {
            poll_interval: Duration::from_millis(20),
            reply_retry_delay: Duration::from_millis(5),
            submit_retry_delay: Duration::from_millis(5),
        }
    }
}
