//! # Block Author
//!
//! Constructs a new block on behalf of the local application and
//! enqueues it as an `ADD_BLOCK` message addressed to the node's own
//! queue. The block is not appended directly: the sync engine's
//! consumption loop picks it up on a later tick and appends it locally,
//! and once paired the normal relay flow carries it onward.

use std::sync::Arc;

use bc_01_transport::RouterClient;
use bc_02_identity::SharedIdentity;
use chrono::{SecondsFormat, Utc};
use shared_types::{Block, RelayMessage};
use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::state::SharedNode;

/// Authors new blocks for the local node.
pub struct BlockAuthor<C: RouterClient> {
    router: Arc<C>,
    identity: SharedIdentity,
    node: SharedNode,
    config: SyncConfig,
}

/// Current time as an ISO-8601 string with millisecond precision and a
/// trailing `Z`, matching the wire timestamp format.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<C: RouterClient> BlockAuthor<C> {
    /// Create an author over a router client and shared node state.
    pub fn new(
        router: Arc<C>,
        identity: SharedIdentity,
        node: SharedNode,
        config: SyncConfig,
    ) -> Self {
        Self {
            router,
            identity,
            node,
            config,
        }
    }

    /// Submit a new block.
    ///
    /// Claims the node's single-flight gate (waiting out any in-flight
    /// dispatch), captures a timestamp, links to the current tip (or
    /// `null` for an empty chain), and enqueues the block to the node's
    /// own queue, retrying the enqueue at a fixed delay until the
    /// router acknowledges it. Returns after the enqueue
    /// acknowledgment; the caller is not blocked on delivery beyond
    /// that.
    pub async fn submit(&self, text: &str) {
        info!(text, "Submitting new block to network");
        let _permit = loop {
            match self.node.try_claim() {
                Some(permit) => break permit,
                None => tokio::time::sleep(self.config.submit_retry_delay).await,
            }
        };

        let block = Block::new(text, self.node.lock().chain.link_hash(), now_timestamp());
        let own_address = self.identity.read().id().to_string();
        let message = RelayMessage::AddBlock {
            sender_address: own_address.clone(),
            block,
        };

        loop {
            let auth = self.identity.read().auth();
            match self.router.enqueue(&auth, &own_address, &message).await {
                Ok(()) => {
                    info!("Successfully sent new block");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Sending new block failed; retrying");
                    tokio::time::sleep(self.config.submit_retry_delay).await;
                }
            }
        }
    }
}
