//! Genesis block — the fixed, non-mined first block seeding a chain.

use suffrage_types::{Block, BlockDigest, Timestamp};

/// Nonce carried by every genesis block.
pub const GENESIS_NONCE: u64 = 100;

/// Create the sentinel genesis block.
///
/// The genesis block is exempt from proof-of-work and linkage checks;
/// validation instead pins its nonce, both digest fields, and its empty
/// vote list to fixed sentinel values. Seeding it is the initializer's
/// responsibility — [`crate::Blockchain::new`] starts empty.
pub fn genesis_block() -> Block {
    Block {
        index: 1,
        votes: Vec::new(),
        timestamp: Timestamp::now(),
        nonce: GENESIS_NONCE,
        hash: BlockDigest::sentinel(),
        previous_block_hash: BlockDigest::sentinel(),
    }
}
