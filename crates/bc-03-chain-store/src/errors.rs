//! # Chain Errors

use thiserror::Error;

/// Rejections raised by the chain store.
///
/// A hash mismatch is local and non-retryable: the offending block (and
/// anything after it in the same batch) is dropped, and the node keeps
/// operating on its last-known-good chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The appended block does not link to the current tip.
    #[error("hash mismatch: expected {expected}, got {got}")]
    HashMismatch {
        /// Link digest of the current tip.
        expected: String,
        /// Hash carried by the rejected block (`"null"` if absent).
        got: String,
    },
}
