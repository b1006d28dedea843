//! Single-shot nonce validation.

use crate::digest::hash_block;
use crate::Difficulty;

/// Validate that a nonce's digest meets the difficulty for the given
/// predecessor digest and payload.
///
/// One digest computation — the re-verification path, not the mining
/// loop.
pub fn verify_nonce(
    previous_hash: &str,
    block_data: &str,
    nonce: u64,
    difficulty: &Difficulty,
) -> bool {
    difficulty.is_met_by(&hash_block(previous_hash, block_data, nonce))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_standard_nonce() {
        let difficulty = Difficulty::standard();
        assert!(verify_nonce("0", "probe-219", 108_750, &difficulty));
    }

    #[test]
    fn rejects_wrong_nonce() {
        let difficulty = Difficulty::standard();
        assert!(!verify_nonce("0", "probe-219", 108_751, &difficulty));
    }

    #[test]
    fn rejects_when_payload_changes() {
        let difficulty = Difficulty::standard();
        assert!(!verify_nonce("0", "probe-219x", 108_750, &difficulty));
    }
}
