//! # Relay Message Envelope
//!
//! The wire envelope exchanged through the router's per-address queues.
//! Messages are produced by a partner node and consumed at most once by
//! this node's sync engine.
//!
//! The tag set is closed: decoding an unknown `type` string fails in the
//! transport layer rather than producing a catch-all variant, so every
//! handled message type is checked exhaustively at compile time.

use serde::{Deserialize, Serialize};

use crate::entities::Block;

/// A message relayed between paired nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RelayMessage {
    /// Ask the partner for its full chain.
    #[serde(rename = "REQUEST_BLOCKS")]
    RequestBlocks {
        /// Queue address of the requesting node.
        sender_address: String,
    },

    /// Full-chain reply to a `REQUEST_BLOCKS`.
    #[serde(rename = "RESPOND_BLOCKS")]
    RespondBlocks {
        /// Queue address of the responding node.
        sender_address: String,
        /// The responder's chain, in order from genesis.
        blocks: Vec<Block>,
    },

    /// A single freshly authored block.
    #[serde(rename = "ADD_BLOCK")]
    AddBlock {
        /// Queue address of the authoring node.
        sender_address: String,
        /// The authored block, already linked to the author's tip.
        block: Block,
    },
}

impl RelayMessage {
    /// The queue address of the node that produced this message.
    pub fn sender_address(&self) -> &str {
        match self {
            Self::RequestBlocks { sender_address }
            | Self::RespondBlocks { sender_address, .. }
            | Self::AddBlock { sender_address, .. } => sender_address,
        }
    }
}
