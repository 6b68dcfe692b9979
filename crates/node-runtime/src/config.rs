//! # Node Configuration
//!
//! Defaults plus environment-variable overrides:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `BOOKCHAIN_ROUTER_URL` | Base URL of the relay router |
//! | `BOOKCHAIN_POLL_INTERVAL_MS` | Dequeue poll interval |
//! | `BOOKCHAIN_EPOCH_INTERVAL_SECS` | Epoch-advance interval (unset = disabled) |

use std::time::Duration;

use bc_04_sync::SyncConfig;
use bc_05_pairing::PairingConfig;
use tracing::warn;

/// Top-level configuration for a node process.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Base URL of the relay router.
    pub router_url: String,
    /// Interval at which the local epoch is advanced to stay loosely
    /// clock-synchronized with the router. `None` disables the ticker
    /// (the current router never rejects epoch-0 tokens mid-session).
    pub epoch_interval: Option<Duration>,
    /// Pairing handshake timings.
    pub pairing: PairingConfig,
    /// Sync engine timings.
    pub sync: SyncConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            router_url: "http://localhost:8000".to_string(),
            epoch_interval: None,
            pairing: PairingConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BOOKCHAIN_ROUTER_URL") {
            config.router_url = url;
        }
        if let Ok(ms) = std::env::var("BOOKCHAIN_POLL_INTERVAL_MS") {
            match ms.parse::<u64>() {
                Ok(ms) if ms > 0 => config.sync.poll_interval = Duration::from_millis(ms),
                _ => warn!("BOOKCHAIN_POLL_INTERVAL_MS must be a positive integer"),
            }
        }
        if let Ok(secs) = std::env::var("BOOKCHAIN_EPOCH_INTERVAL_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.epoch_interval = Some(Duration::from_secs(secs)),
                _ => warn!("BOOKCHAIN_EPOCH_INTERVAL_SECS must be a positive integer"),
            }
        }

        config
    }
}
