//! # Chain Invariants
//!
//! Whole-chain integrity check, used by tests and debugging surfaces.
//! The store itself enforces the link rule incrementally on append;
//! this verifies an arbitrary block sequence from scratch.

use shared_types::Block;

/// Verify the hash-link invariant over a full block sequence:
/// the first block carries no hash, and every later block carries the
/// link digest of its predecessor. An empty sequence is valid.
pub fn verify_links(blocks: &[Block]) -> bool {
    if let Some(first) = blocks.first() {
        if !first.is_genesis() {
            return false;
        }
    }
    blocks
        .windows(2)
        .all(|pair| pair[1].hash.as_deref() == Some(pair[0].link_hash().as_str()))
}
