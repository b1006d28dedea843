//! The digest binding a block to its predecessor and payload.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

use suffrage_types::BlockDigest;

/// Compute the digest for `(previous_hash, block_data, nonce)`.
///
/// SHA-256 over the previous digest, the payload text, and the decimal
/// rendering of the nonce, concatenated with no separators; the raw hash
/// is rendered as URL-safe base64 without padding.
///
/// The miner and every independent validator must derive the same digest
/// for the same inputs, so this transcription — concatenation order,
/// base-10 nonce, alphabet, no padding — must never drift.
pub fn hash_block(previous_hash: &str, block_data: &str, nonce: u64) -> BlockDigest {
    let mut hasher = Sha256::new();
    hasher.update(previous_hash.as_bytes());
    hasher.update(block_data.as_bytes());
    hasher.update(nonce.to_string().as_bytes());
    BlockDigest::new(URL_SAFE_NO_PAD.encode(hasher.finalize()))
}
