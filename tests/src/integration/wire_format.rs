//! # Wire Format
//!
//! End-to-end shape of the bodies exchanged with the router: the
//! enqueue body carries the relay envelope as a JSON-encoded string,
//! so a message crosses two encoding layers on its way to a queue.

#[cfg(test)]
mod tests {
    use bc_01_transport::EnqueueRequest;
    use serde_json::Value;
    use shared_types::{Block, RelayMessage};

    #[test]
    fn test_enqueue_body_carries_double_encoded_envelope() {
        let message = RelayMessage::AddBlock {
            sender_address: "node-1".to_string(),
            block: Block::genesis("hello", "2024-01-01T00:00:00.000Z"),
        };
        let body = EnqueueRequest {
            identity: "node-1".to_string(),
            token: "token".to_string(),
            address: "node-1".to_string(),
            data: serde_json::to_string(&message).unwrap(),
        };

        let wire = serde_json::to_string(&body).unwrap();
        let outer: Value = serde_json::from_str(&wire).unwrap();

        assert_eq!(outer["identity"], "node-1");
        assert_eq!(outer["token"], "token");
        assert_eq!(outer["address"], "node-1");
        // `data` is a string, not a nested object.
        let inner = outer["data"].as_str().unwrap();
        let decoded: RelayMessage = serde_json::from_str(inner).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_chain_batch_survives_both_encoding_layers() {
        let genesis = Block::genesis("alpha", "2024-01-01T00:00:00Z");
        let next = Block::new("beta", Some(genesis.link_hash()), "2024-01-02T00:00:00Z");
        let message = RelayMessage::RespondBlocks {
            sender_address: "node-2".to_string(),
            blocks: vec![genesis, next],
        };
        let body = EnqueueRequest {
            identity: "node-2".to_string(),
            token: "token".to_string(),
            address: "node-1".to_string(),
            data: serde_json::to_string(&message).unwrap(),
        };

        let wire = serde_json::to_string(&body).unwrap();
        // The genesis link is a JSON null inside the embedded string.
        assert!(wire.contains(r#"\"hash\":null"#));

        let outer: Value = serde_json::from_str(&wire).unwrap();
        let decoded: RelayMessage = serde_json::from_str(outer["data"].as_str().unwrap()).unwrap();
        match decoded {
            RelayMessage::RespondBlocks { blocks, .. } => {
                assert_eq!(blocks.len(), 2);
                assert!(blocks[0].is_genesis());
                assert_eq!(blocks[1].hash.as_deref(), Some(blocks[0].link_hash().as_str()));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
