//! A committed block in the vote ledger.

use serde::{Deserialize, Serialize};

use crate::{BlockDigest, Timestamp, Vote};

/// A block sealing a batch of votes into the chain.
///
/// Identity is the `(index, hash)` pair. Blocks are immutable once
/// appended — the ledger hands out references and clones, never mutable
/// access to committed state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain, strictly sequential starting at 1.
    pub index: u64,
    /// Votes sealed into this block, in submission order.
    pub votes: Vec<Vote>,
    /// Commit wall-clock time. Informational; not covered by any digest.
    pub timestamp: Timestamp,
    /// Nonce found by the proof-of-work search.
    pub nonce: u64,
    /// Digest binding this block to its payload and predecessor.
    pub hash: BlockDigest,
    /// The predecessor's digest.
    pub previous_block_hash: BlockDigest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_camel_case_names() {
        let block = Block {
            index: 2,
            votes: vec![Vote::new("alice", "x1", "xavier")],
            timestamp: Timestamp::new(42),
            nonce: 7,
            hash: BlockDigest::new("abc"),
            previous_block_hash: BlockDigest::sentinel(),
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""previousBlockHash":"0""#));
        assert!(json.contains(r#""index":2"#));

        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
