//! # Hashing
//!
//! SHA-256 hex digests. The wire protocol fixes SHA-256 with lowercase
//! hex encoding for both block link hashes and auth tokens, so the
//! helper lives here rather than behind a configurable hasher.

use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 digest of a string.
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(digest)
}
