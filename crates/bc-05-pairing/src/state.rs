//! # Pairing States

use std::fmt;

/// States of the pairing handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingState {
    /// Requesting an identity from the router.
    Registering,
    /// Identity received; auth token derivable without a network call.
    TokenReady,
    /// Requesting a partner address.
    Pairing,
    /// `REQUEST_BLOCKS` sent; waiting for the partner's chain.
    BlocksRequested,
    /// Consumption loop running; partner deadline armed.
    Syncing,
    /// Partner never responded; re-pairing with a different node.
    SyncFailed,
    /// Terminal success: chain received, node operational.
    Ready,
}

impl fmt::Display for PairingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Registering => "REGISTERING",
            Self::TokenReady => "TOKEN_READY",
            Self::Pairing => "PAIRING",
            Self::BlocksRequested => "BLOCKS_REQUESTED",
            Self::Syncing => "SYNCING",
            Self::SyncFailed => "SYNC_FAILED",
            Self::Ready => "READY",
        };
        f.write_str(name)
    }
}
