//! # Chain Store

use shared_types::Block;

use crate::errors::ChainError;

/// Append-only, hash-linked sequence of blocks.
#[derive(Debug, Clone, Default)]
pub struct ChainStore {
    blocks: Vec<Block>,
}

/// Result of bulk ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Number of blocks appended before the batch was exhausted or a
    /// rejection occurred.
    pub accepted: usize,
    /// The rejection that halted ingestion, if any.
    pub rejection: Option<ChainError>,
}

impl BatchOutcome {
    /// Whether the whole batch was appended.
    pub fn complete(&self) -> bool {
        self.rejection.is_none()
    }
}

impl ChainStore {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The most recently appended block, if any.
    pub fn most_recent(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Link digest of the current tip, or `None` for an empty chain.
    /// This is the hash the next appended block must carry.
    pub fn link_hash(&self) -> Option<String> {
        self.most_recent().map(Block::link_hash)
    }

    /// All blocks, in order from genesis.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a block.
    ///
    /// The first append always succeeds and defines the genesis block.
    /// Every later append is accepted only if `block.hash` equals the
    /// link digest of the current tip; on mismatch the chain is left
    /// unchanged and the caller must stop ingesting the batch.
    pub fn append(&mut self, block: Block) -> Result<(), ChainError> {
        let Some(expected) = self.link_hash() else {
            tracing::debug!(text = %block.text, "Appended genesis block");
            self.blocks.push(block);
            return Ok(());
        };

        match block.hash.as_deref() {
            Some(hash) if hash == expected => {
                tracing::debug!(height = self.blocks.len(), text = %block.text, "Validated and appended block");
                self.blocks.push(block);
                Ok(())
            }
            other => Err(ChainError::HashMismatch {
                expected,
                got: other.unwrap_or("null").to_string(),
            }),
        }
    }

    /// Ingest a batch of blocks in order, halting at the first
    /// rejection. Already-accepted blocks are kept; nothing after the
    /// rejected block is examined.
    pub fn ingest(&mut self, batch: Vec<Block>) -> BatchOutcome {
        let mut accepted = 0;
        for block in batch {
            match self.append(block) {
                Ok(()) => accepted += 1,
                Err(rejection) => {
                    tracing::warn!(%rejection, accepted, "Invalid block; ignoring remaining blocks");
                    return BatchOutcome {
                        accepted,
                        rejection: Some(rejection),
                    };
                }
            }
        }
        BatchOutcome {
            accepted,
            rejection: None,
        }
    }
}
