//! # Pairing Negotiator
//!
//! Bootstraps a node: registers for an identity, derives the auth
//! token, requests a partner, asks the partner for its chain, and
//! starts the sync engine's consumption loop. Returns a [`PairedNode`]
//! handle once the partner's chain has arrived.

use std::sync::Arc;

use bc_01_transport::{RegisterResponse, RouterClient};
use bc_02_identity::{share_identity, IdentityManager, SharedIdentity};
use bc_04_sync::{shared_node, NodeEvents, ProgressSink, SharedNode, SyncConfig, SyncEngine};
use shared_types::RelayMessage;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::PairingConfig;
use crate::state::PairingState;

/// Drives the pairing handshake against the router.
pub struct PairingNegotiator<C: RouterClient> {
    router: Arc<C>,
    events: Arc<dyn NodeEvents>,
    progress: Arc<dyn ProgressSink>,
    config: PairingConfig,
    sync_config: SyncConfig,
    state: PairingState,
}

/// A fully bootstrapped node: identity established, partner paired,
/// chain received, consumption loop running.
pub struct PairedNode {
    /// The node's identity manager.
    pub identity: SharedIdentity,
    /// Shared chain state and single-flight gate.
    pub node: SharedNode,
    /// Queue address of the partner that supplied the chain.
    pub partner: String,
    shutdown: watch::Sender<bool>,
    sync_task: JoinHandle<()>,
}

impl PairedNode {
    /// Stop the consumption loop and wait for it to exit.
    pub async fn shutdown(self) {
        if self.shutdown.send(true).is_err() {
            warn!("Sync task already stopped");
        }
        let _ = self.sync_task.await;
    }
}

impl<C: RouterClient + 'static> PairingNegotiator<C> {
    /// Create a negotiator over a router client.
    pub fn new(
        router: Arc<C>,
        events: Arc<dyn NodeEvents>,
        progress: Arc<dyn ProgressSink>,
        config: PairingConfig,
        sync_config: SyncConfig,
    ) -> Self {
        Self {
            router,
            events,
            progress,
            config,
            sync_config,
            state: PairingState::Registering,
        }
    }

    fn transition(&mut self, next: PairingState) {
        info!(from = %self.state, to = %next, "Pairing transition");
        self.state = next;
    }

    /// Run the handshake to completion.
    ///
    /// Never fails: every network step retries at its fixed delay, and
    /// a silent partner sends the machine back to `PAIRING` for a new
    /// one. Resolves only when a partner's chain has been received.
    pub async fn run(mut self) -> PairedNode {
        let registration = self.register().await;

        self.transition(PairingState::TokenReady);
        self.progress.on_progress(0.3, "Generating auth token...");
        let identity = share_identity(IdentityManager::from_registration(registration));
        let node = shared_node();

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut pending_task: Option<JoinHandle<()>> = None;

        let (partner, sync_task) = loop {
            self.transition(PairingState::Pairing);
            let partner = self.pair(&identity).await;

            self.transition(PairingState::BlocksRequested);
            self.request_blocks(&identity, &partner).await;

            // Start the consumption loop once, on the first successful
            // blocks request; later rounds carry the running task over.
            let task = match pending_task.take() {
                Some(task) => task,
                None => SyncEngine::new(
                    Arc::clone(&self.router),
                    Arc::clone(&identity),
                    Arc::clone(&node),
                    Arc::clone(&self.events),
                    Arc::clone(&self.progress),
                    self.sync_config.clone(),
                )
                .spawn(shutdown_rx.clone()),
            };

            // Single deadline check: either the partner's chain arrived
            // or we abandon it and pair with another node.
            self.transition(PairingState::Syncing);
            tokio::time::sleep(self.config.partner_deadline).await;
            if node.lock().received_blocks {
                self.transition(PairingState::Ready);
                self.progress.on_progress(1.0, "Node ready.");
                break (partner, task);
            }
            pending_task = Some(task);

            self.transition(PairingState::SyncFailed);
            warn!(partner, "No response received from partner; trying another");
            self.progress.on_progress(
                0.5,
                "No response received from partner node. Trying another...",
            );
        };

        PairedNode {
            identity,
            node,
            partner,
            shutdown: shutdown_tx,
            sync_task,
        }
    }

    /// `REGISTERING`: obtain an identity, retrying at a fixed delay.
    async fn register(&mut self) -> RegisterResponse {
        self.progress
            .on_progress(0.1, "Node initialised. Requesting identity...");
        loop {
            match self.router.register().await {
                Ok(registration) => {
                    info!(identity = %registration.identity, "Successfully got identity");
                    self.progress.on_progress(
                        0.2,
                        &format!("Successfully got identity: {}", registration.identity),
                    );
                    return registration;
                }
                Err(e) => {
                    warn!(error = %e, "Register request failed; retrying");
                    tokio::time::sleep(self.config.register_retry_delay).await;
                }
            }
        }
    }

    /// `PAIRING`: request a partner address, retrying at a fixed delay.
    async fn pair(&mut self, identity: &SharedIdentity) -> String {
        self.progress
            .on_progress(0.5, "Attempting to find another node...");
        loop {
            let auth = identity.read().auth();
            match self.router.pair(&auth).await {
                Ok(resp) => {
                    info!(partner = %resp.address, "Successfully got partner address");
                    self.progress
                        .on_progress(0.6, &format!("Got node address! {}", resp.address));
                    return resp.address;
                }
                Err(e) => {
                    warn!(error = %e, "Pair request failed; retrying");
                    tokio::time::sleep(self.config.pair_retry_delay).await;
                }
            }
        }
    }

    /// `BLOCKS_REQUESTED`: ask the partner for its chain, retrying the
    /// enqueue at a fixed delay.
    async fn request_blocks(&mut self, identity: &SharedIdentity, partner: &str) {
        let message = RelayMessage::RequestBlocks {
            sender_address: identity.read().id().to_string(),
        };
        loop {
            let auth = identity.read().auth();
            match self.router.enqueue(&auth, partner, &message).await {
                Ok(()) => {
                    info!(partner, "Successfully sent request for blocks");
                    self.progress.on_progress(0.7, "Request for blocks sent...");
                    return;
                }
                Err(e) => {
                    warn!(error = %e, partner, "Blocks request failed; retrying");
                    tokio::time::sleep(self.config.request_retry_delay).await;
                }
            }
        }
    }
}
