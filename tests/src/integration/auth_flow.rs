//! # Auth Flow
//!
//! Epoch-bound token validation between the identity manager and the
//! router, and the sync engine's behavior when a call is rejected.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bc_01_transport::{RouterAuth, RouterClient, RouterError};
    use bc_02_identity::{share_identity, IdentityManager};
    use bc_04_sync::{shared_node, NullEvents, NullProgress, SyncConfig, SyncEngine};
    use shared_types::RelayMessage;

    use crate::mock_router::MockRouter;

    #[tokio::test]
    async fn test_current_epoch_token_is_accepted() {
        let router = MockRouter::new();
        let manager = IdentityManager::from_registration(router.register().await.unwrap());
        // An authenticated poll on an empty queue is the steady state.
        assert!(matches!(
            router.dequeue(&manager.auth()).await,
            Err(RouterError::EmptyQueue)
        ));
    }

    #[tokio::test]
    async fn test_stale_epoch_token_is_rejected_until_node_catches_up() {
        let router = MockRouter::new();
        let mut manager = IdentityManager::from_registration(router.register().await.unwrap());

        router.advance_epoch(manager.id());
        assert!(matches!(
            router.dequeue(&manager.auth()).await,
            Err(RouterError::Status { status: 403, .. })
        ));

        manager.advance_epoch();
        assert!(matches!(
            router.dequeue(&manager.auth()).await,
            Err(RouterError::EmptyQueue)
        ));
    }

    #[tokio::test]
    async fn test_unregistered_identity_is_rejected() {
        let router = MockRouter::new();
        let manager = IdentityManager::new(shared_types::NodeIdentity::new("node-99", 1));
        assert!(matches!(
            router.pair(&manager.auth()).await,
            Err(RouterError::Status { status: 403, .. })
        ));
        assert!(matches!(
            router.dequeue(&RouterAuth::new("node-99", "bogus")).await,
            Err(RouterError::Status { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_engine_retries_through_auth_rejection() {
        let router = Arc::new(MockRouter::new());
        let registration = router.register().await.unwrap();
        let identity = share_identity(IdentityManager::from_registration(registration));
        let node = shared_node();
        let engine = SyncEngine::new(
            Arc::clone(&router),
            Arc::clone(&identity),
            Arc::clone(&node),
            Arc::new(NullEvents),
            Arc::new(NullProgress),
            SyncConfig::for_testing(),
        );
        router.seed_queue(
            identity.read().id(),
            RelayMessage::RequestBlocks {
                sender_address: "node-9".to_string(),
            },
        );

        // Router moved on to a new epoch; the poll is rejected but the
        // node stays available for the next tick.
        router.advance_epoch(identity.read().id());
        engine.tick().await;
        assert!(!node.busy());
        assert_eq!(router.queue_len(identity.read().id()), 1);

        // Once the local epoch catches up, the same message goes through.
        identity.write().advance_epoch();
        engine.tick().await;
        assert_eq!(router.queue_len(identity.read().id()), 0);
    }
}
