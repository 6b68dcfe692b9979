//! # Pairing Flow
//!
//! Full bootstrap of a fresh node against a live partner: register,
//! pair, request blocks, receive the partner's chain, reach ready. Also
//! covers abandoning a silent partner for a responsive one.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bc_01_transport::RouterClient;
    use bc_02_identity::{share_identity, IdentityManager, SharedIdentity};
    use bc_03_chain_store::verify_links;
    use bc_04_sync::{shared_node, NullEvents, NullProgress, SharedNode, SyncConfig, SyncEngine};
    use bc_05_pairing::{PairingConfig, PairingNegotiator};
    use shared_types::Block;
    use tokio::sync::watch;
    use tokio::task::JoinHandle;

    use crate::mock_router::MockRouter;

    fn linked_chain(texts: &[&str]) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        for (i, text) in texts.iter().enumerate() {
            let timestamp = format!("2024-01-0{}T00:00:00Z", i + 1);
            let hash = blocks.last().map(Block::link_hash);
            blocks.push(Block::new(*text, hash, timestamp));
        }
        blocks
    }

    /// A registered node with a seeded chain and a running consumption
    /// loop, standing in for an established peer.
    struct LivePartner {
        identity: String,
        node: SharedNode,
        shutdown: watch::Sender<bool>,
        task: JoinHandle<()>,
    }

    impl LivePartner {
        async fn spawn(router: &Arc<MockRouter>, texts: &[&str]) -> Self {
            let registration = router.register().await.unwrap();
            let identity = registration.identity.clone();
            let manager: SharedIdentity =
                share_identity(IdentityManager::from_registration(registration));
            let node = shared_node();
            for block in linked_chain(texts) {
                node.lock().chain.append(block).unwrap();
            }
            let engine = SyncEngine::new(
                Arc::clone(router),
                manager,
                Arc::clone(&node),
                Arc::new(NullEvents),
                Arc::new(NullProgress),
                SyncConfig::for_testing(),
            );
            let (shutdown, shutdown_rx) = watch::channel(false);
            let task = engine.spawn(shutdown_rx);
            Self {
                identity,
                node,
                shutdown,
                task,
            }
        }

        async fn stop(self) {
            let _ = self.shutdown.send(true);
            let _ = self.task.await;
        }
    }

    fn negotiator(router: &Arc<MockRouter>) -> PairingNegotiator<MockRouter> {
        PairingNegotiator::new(
            Arc::clone(router),
            Arc::new(NullEvents),
            Arc::new(NullProgress),
            PairingConfig::for_testing(),
            SyncConfig::for_testing(),
        )
    }

    #[tokio::test]
    async fn test_bootstrap_against_live_partner() {
        let router = Arc::new(MockRouter::new());
        let partner = LivePartner::spawn(&router, &["alpha", "beta", "gamma"]).await;
        // Scripted repeatedly so a slow first round re-pairs with the
        // same partner instead of starving on /pair.
        for _ in 0..5 {
            router.script_partner(&partner.identity);
        }

        let paired = negotiator(&router).run().await;

        assert_eq!(paired.partner, partner.identity);
        assert_eq!(paired.identity.read().id(), "node-2");
        {
            let synced = paired.node.lock();
            assert_eq!(synced.chain.blocks(), partner.node.lock().chain.blocks());
            assert!(verify_links(synced.chain.blocks()));
        }

        paired.shutdown().await;
        partner.stop().await;
    }

    #[tokio::test]
    async fn test_silent_partner_is_abandoned_for_live_one() {
        let router = Arc::new(MockRouter::new());
        // Registered but never consuming its queue.
        let ghost = router.register().await.unwrap();
        let partner = LivePartner::spawn(&router, &["alpha"]).await;

        router.script_partner(&ghost.identity);
        for _ in 0..5 {
            router.script_partner(&partner.identity);
        }

        let paired = negotiator(&router).run().await;

        assert_eq!(paired.partner, partner.identity);
        assert_eq!(paired.node.lock().chain.len(), 1);
        // The ghost still holds its unanswered request.
        assert_eq!(router.queue_len(&ghost.identity), 1);

        paired.shutdown().await;
        partner.stop().await;
    }

    #[tokio::test]
    async fn test_bootstrap_from_empty_partner_chain() {
        let router = Arc::new(MockRouter::new());
        let partner = LivePartner::spawn(&router, &[]).await;
        for _ in 0..5 {
            router.script_partner(&partner.identity);
        }

        let paired = negotiator(&router).run().await;

        // An empty RESPOND_BLOCKS still counts as a received chain.
        assert!(paired.node.lock().chain.is_empty());
        assert!(paired.node.lock().received_blocks);

        paired.shutdown().await;
        partner.stop().await;
    }
}
