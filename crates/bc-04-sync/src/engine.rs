//! # Sync Engine
//!
//! Cooperative polling loop consuming the node's relay queue. Each tick
//! either skips (gate held by another operation), finds the queue
//! empty, or dequeues exactly one message and dispatches it by type:
//!
//! - `REQUEST_BLOCKS`: reply with the full local chain, retrying the
//!   enqueue at a fixed delay until it succeeds.
//! - `RESPOND_BLOCKS`: bulk-ingest in order, halting at the first bad
//!   link; the node is marked as having received blocks either way.
//! - `ADD_BLOCK`: append a single block; rejected blocks are dropped
//!   silently (a rejected real-time block is presumed to be a fork or
//!   stale data, not a transient fault).

use std::sync::Arc;

use bc_01_transport::{RouterClient, RouterError};
use bc_02_identity::SharedIdentity;
use shared_types::{Block, RelayMessage};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::SyncConfig;
use crate::events::{NodeEvents, ProgressSink};
use crate::state::SharedNode;

/// The relay-queue consumption loop.
pub struct SyncEngine<C: RouterClient> {
    router: Arc<C>,
    identity: SharedIdentity,
    node: SharedNode,
    events: Arc<dyn NodeEvents>,
    progress: Arc<dyn ProgressSink>,
    config: SyncConfig,
}

impl<C: RouterClient + 'static> SyncEngine<C> {
    /// Create an engine over a router client and shared node state.
    pub fn new(
        router: Arc<C>,
        identity: SharedIdentity,
        node: SharedNode,
        events: Arc<dyn NodeEvents>,
        progress: Arc<dyn ProgressSink>,
        config: SyncConfig,
    ) -> Self {
        Self {
            router,
            identity,
            node,
            events,
            progress,
            config,
        }
    }

    /// Spawn the polling loop. Runs until the shutdown channel fires.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("Starting to consume queue");
            let mut ticker = tokio::time::interval(self.config.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => self.tick().await,
                    _ = shutdown.changed() => {
                        info!("Sync engine shutdown signal received");
                        break;
                    }
                }
            }
        })
    }

    /// One poll tick: dequeue-and-dispatch, unless the gate is held.
    ///
    /// The permit claimed here is released when the tick returns, on
    /// every path. Public so tests can drive the loop deterministically.
    pub async fn tick(&self) {
        let Some(_permit) = self.node.try_claim() else {
            return;
        };

        let auth = self.identity.read().auth();
        match self.router.dequeue(&auth).await {
            Ok(message) => self.dispatch(message).await,
            Err(RouterError::EmptyQueue) => {
                // Expected steady state; nothing to do until the next tick.
                debug!("No data to dequeue");
            }
            Err(e) => {
                // Cheap poll: no backoff, the next tick retries.
                warn!(error = %e, "Dequeue failed; retrying next tick");
            }
        }
    }

    /// Dispatch a dequeued message. Runs with the caller's gate permit
    /// held.
    async fn dispatch(&self, message: RelayMessage) {
        debug!(sender = message.sender_address(), "Dequeued message");
        match message {
            RelayMessage::RequestBlocks { sender_address } => {
                self.reply_with_chain(&sender_address).await;
            }
            RelayMessage::RespondBlocks { blocks, .. } => {
                self.ingest_chain(blocks);
            }
            RelayMessage::AddBlock { block, .. } => {
                self.ingest_block(block);
            }
        }
    }

    /// Reply to a partner's `REQUEST_BLOCKS` with the full local chain.
    async fn reply_with_chain(&self, recipient: &str) {
        let message = RelayMessage::RespondBlocks {
            sender_address: self.identity.read().id().to_string(),
            blocks: self.node.lock().chain.blocks().to_vec(),
        };

        loop {
            let auth = self.identity.read().auth();
            match self.router.enqueue(&auth, recipient, &message).await {
                Ok(()) => {
                    info!(recipient, "Sent requested blocks");
                    return;
                }
                Err(e) => {
                    warn!(error = %e, recipient, "Sending blocks failed; retrying");
                    tokio::time::sleep(self.config.reply_retry_delay).await;
                }
            }
        }
    }

    /// Bulk-ingest a partner's chain, halting at the first bad link.
    fn ingest_chain(&self, blocks: Vec<Block>) {
        info!(count = blocks.len(), "Checking integrity of bookchain");
        self.progress
            .on_progress(0.8, "Checking integrity of bookchain...");
        let outcome = {
            let mut node = self.node.lock();
            let outcome = node.chain.ingest(blocks);
            // A truncated batch still counts as received: the node
            // continues with the validated prefix.
            node.received_blocks = true;
            outcome
        };

        for _ in 0..outcome.accepted {
            self.events.on_new_block();
        }

        match outcome.rejection {
            None => {
                info!(accepted = outcome.accepted, "All blocks processed");
                self.progress.on_progress(0.95, "All blocks processed.");
            }
            Some(rejection) => {
                warn!(%rejection, accepted = outcome.accepted, "Hashes do not match; kept validated prefix");
                self.progress.on_progress(
                    0.9,
                    "Hashes do not match! Encountered invalid block. Ignoring remaining blocks.",
                );
            }
        }
    }

    /// Append a single relayed block.
    fn ingest_block(&self, block: Block) {
        let result = self.node.lock().chain.append(block);
        match result {
            Ok(()) => self.events.on_new_block(),
            Err(rejection) => {
                // Not retried: presumed fork or stale data.
                debug!(%rejection, "Invalid block ignored");
            }
        }
    }
}
