//! Content digests for content-addressed artifact storage
//!
//! Artifact payloads are opaque (raw bytes or a URI); the registry keys
//! integrity checks on a SHA-256 digest computed once at creation.

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 digest of an artifact payload.
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
