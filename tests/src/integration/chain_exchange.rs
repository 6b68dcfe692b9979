//! # Chain Exchange
//!
//! Two live sync engines trading blocks through the router's queues:
//! the full request/respond bootstrap, bulk-ingest truncation, relayed
//! single blocks, and the author's submit-to-self round trip.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use bc_01_transport::RouterClient;
    use bc_02_identity::{share_identity, IdentityManager, SharedIdentity};
    use bc_03_chain_store::verify_links;
    use bc_04_sync::{
        shared_node, BlockAuthor, NodeEvents, NullEvents, NullProgress, SharedNode, SyncConfig,
        SyncEngine,
    };
    use shared_types::{Block, RelayMessage};

    use crate::mock_router::MockRouter;

    /// Build a correctly linked chain from a list of block texts.
    fn linked_chain(texts: &[&str]) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        for (i, text) in texts.iter().enumerate() {
            let timestamp = format!("2024-01-0{}T00:00:00Z", i + 1);
            let hash = blocks.last().map(Block::link_hash);
            blocks.push(Block::new(*text, hash, timestamp));
        }
        blocks
    }

    #[derive(Default)]
    struct CountingEvents {
        appended: AtomicUsize,
    }

    impl NodeEvents for CountingEvents {
        fn on_new_block(&self) {
            self.appended.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Register a fresh node and wire an engine to it.
    async fn join(
        router: &Arc<MockRouter>,
        events: Arc<dyn NodeEvents>,
    ) -> (SharedIdentity, SharedNode, SyncEngine<MockRouter>) {
        let registration = router.register().await.unwrap();
        let identity = share_identity(IdentityManager::from_registration(registration));
        let node = shared_node();
        let engine = SyncEngine::new(
            Arc::clone(router),
            Arc::clone(&identity),
            Arc::clone(&node),
            events,
            Arc::new(NullProgress),
            SyncConfig::for_testing(),
        );
        (identity, node, engine)
    }

    #[tokio::test]
    async fn test_request_and_respond_synchronizes_chains() {
        let router = Arc::new(MockRouter::new());
        let (id_a, node_a, engine_a) = join(&router, Arc::new(NullEvents)).await;
        let (id_b, node_b, engine_b) = join(&router, Arc::new(NullEvents)).await;
        for block in linked_chain(&["alpha", "beta", "gamma"]) {
            node_a.lock().chain.append(block).unwrap();
        }

        let request = RelayMessage::RequestBlocks {
            sender_address: id_b.read().id().to_string(),
        };
        router
            .enqueue(&id_b.read().auth(), id_a.read().id(), &request)
            .await
            .unwrap();

        engine_a.tick().await;
        engine_b.tick().await;

        {
            let a = node_a.lock();
            let b = node_b.lock();
            assert_eq!(b.chain.blocks(), a.chain.blocks());
            assert!(verify_links(b.chain.blocks()));
            assert!(b.received_blocks);
        }
        assert!(!node_b.busy());
    }

    #[tokio::test]
    async fn test_corrupted_batch_keeps_validated_prefix() {
        let router = Arc::new(MockRouter::new());
        let (id_b, node_b, engine_b) = join(&router, Arc::new(NullEvents)).await;

        let mut blocks = linked_chain(&["a", "b", "c", "d"]);
        blocks[2].hash = Some("deadbeef".to_string());
        router.seed_queue(
            id_b.read().id(),
            RelayMessage::RespondBlocks {
                sender_address: "node-9".to_string(),
                blocks: blocks.clone(),
            },
        );

        engine_b.tick().await;

        let node = node_b.lock();
        assert_eq!(node.chain.blocks(), &blocks[..2]);
        assert!(node.received_blocks);
    }

    #[tokio::test]
    async fn test_bulk_ingest_reports_each_accepted_block() {
        let router = Arc::new(MockRouter::new());
        let events = Arc::new(CountingEvents::default());
        let (id_b, node_b, engine_b) =
            join(&router, Arc::clone(&events) as Arc<dyn NodeEvents>).await;

        let mut blocks = linked_chain(&["a", "b", "c"]);
        blocks.push(Block::new("bad", Some("deadbeef".to_string()), "2024-01-09T00:00:00Z"));
        router.seed_queue(
            id_b.read().id(),
            RelayMessage::RespondBlocks {
                sender_address: "node-9".to_string(),
                blocks,
            },
        );

        engine_b.tick().await;

        assert_eq!(node_b.lock().chain.len(), 3);
        assert_eq!(events.appended.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_relayed_block_extends_the_chain() {
        let router = Arc::new(MockRouter::new());
        let (id_b, node_b, engine_b) = join(&router, Arc::new(NullEvents)).await;
        let shared = linked_chain(&["alpha"]);
        node_b.lock().chain.append(shared[0].clone()).unwrap();

        let next = Block::new("beta", Some(shared[0].link_hash()), "2024-01-02T00:00:00Z");
        router.seed_queue(
            id_b.read().id(),
            RelayMessage::AddBlock {
                sender_address: "node-9".to_string(),
                block: next.clone(),
            },
        );

        engine_b.tick().await;

        let node = node_b.lock();
        assert_eq!(node.chain.len(), 2);
        assert_eq!(node.chain.most_recent(), Some(&next));
    }

    #[tokio::test]
    async fn test_divergent_block_is_rejected() {
        let router = Arc::new(MockRouter::new());
        let (id_b, node_b, engine_b) = join(&router, Arc::new(NullEvents)).await;
        let chain = linked_chain(&["alpha", "beta"]);
        for block in &chain {
            node_b.lock().chain.append(block.clone()).unwrap();
        }

        // A fork: links to the genesis block instead of the local tip.
        let fork = Block::new("beta'", Some(chain[0].link_hash()), "2024-01-05T00:00:00Z");
        router.seed_queue(
            id_b.read().id(),
            RelayMessage::AddBlock {
                sender_address: "node-9".to_string(),
                block: fork,
            },
        );

        engine_b.tick().await;

        assert_eq!(node_b.lock().chain.blocks(), chain.as_slice());
        assert!(!node_b.busy());
    }

    #[tokio::test]
    async fn test_author_round_trip_through_own_queue() {
        let router = Arc::new(MockRouter::new());
        let events = Arc::new(CountingEvents::default());
        let (identity, node, engine) =
            join(&router, Arc::clone(&events) as Arc<dyn NodeEvents>).await;
        let author = BlockAuthor::new(
            Arc::clone(&router),
            Arc::clone(&identity),
            Arc::clone(&node),
            SyncConfig::for_testing(),
        );

        author.submit("first entry").await;
        engine.tick().await;
        author.submit("second entry").await;
        engine.tick().await;

        let state = node.lock();
        assert_eq!(state.chain.len(), 2);
        assert!(verify_links(state.chain.blocks()));
        assert_eq!(state.chain.blocks()[0].text, "first entry");
        assert_eq!(state.chain.blocks()[1].text, "second entry");
        assert_eq!(events.appended.load(Ordering::SeqCst), 2);
    }
}
