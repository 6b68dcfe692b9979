//! # Pairing Configuration

use std::time::Duration;

/// Configuration for the pairing handshake.
///
/// The defaults are the relay protocol's historical constants; they are
/// deliberate per-step values, not a shared knob.
#[derive(Debug, Clone)]
pub struct PairingConfig {
    /// Fixed delay before retrying a failed `/register`.
    pub register_retry_delay: Duration,

    /// Fixed delay before retrying a failed `/pair`.
    pub pair_retry_delay: Duration,

    /// Fixed delay before retrying a failed `REQUEST_BLOCKS` enqueue.
    pub request_retry_delay: Duration,

    /// How long to wait for the partner's chain before abandoning it
    /// and pairing with a different node.
    pub partner_deadline: Duration,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            register_retry_delay: Duration::from_millis(500),
            pair_retry_delay: Duration::from_millis(250),
            request_retry_delay: Duration::from_millis(500),
            partner_deadline: Duration::from_secs(3),
        }
    }
}

impl PairingConfig {
    /// Create a config for testing (short delays).
    pub fn for_testing() -> Self {
        Self {
            register_retry_delay: Duration::from_millis(5),
            pair_retry_delay: Duration::from_millis(5),
            request_retry_delay: Duration::from_millis(5),
            partner_deadline: Duration::from_millis(50),
        }
    }
}
