//! Full-chain re-derivation.

use thiserror::Error;

use suffrage_types::Block;
use suffrage_work::{hash_block, Difficulty};

use crate::genesis::GENESIS_NONCE;
use crate::payload::encode_payload;

/// Why a chain failed validation.
///
/// The public surface stays a boolean verdict; callers that need the
/// failing check and block index read this instead of re-deriving it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChainFault {
    #[error("chain has no genesis block")]
    MissingGenesis,

    #[error("block {index}: recomputed digest misses the difficulty target")]
    WorkBelowTarget { index: u64 },

    #[error("block {index}: stored predecessor digest does not match the previous block")]
    BrokenLink { index: u64 },

    #[error("genesis block violates the {field} sentinel")]
    GenesisSentinel { field: &'static str },
}

/// Re-derive every block's proof-of-work and linkage, then pin the
/// genesis sentinels. Fails fast on the first violation.
pub(crate) fn validate_chain(chain: &[Block], difficulty: &Difficulty) -> Result<(), ChainFault> {
    for i in 1..chain.len() {
        let current = &chain[i];
        let previous = &chain[i - 1];

        // The payload index deliberately trails the previous block's
        // index by one; miners build their preimage with the same
        // formula. Saturating so a forged index-0 block yields a fault,
        // not a panic.
        let payload = encode_payload(previous.index.saturating_sub(1), &current.votes);
        let digest = hash_block(previous.hash.as_str(), &payload, current.nonce);

        if !difficulty.is_met_by(&digest) {
            return Err(ChainFault::WorkBelowTarget {
                index: current.index,
            });
        }
        if current.previous_block_hash != previous.hash {
            return Err(ChainFault::BrokenLink {
                index: current.index,
            });
        }
    }

    let genesis = chain.first().ok_or(ChainFault::MissingGenesis)?;
    if genesis.nonce != GENESIS_NONCE {
        return Err(ChainFault::GenesisSentinel { field: "nonce" });
    }
    if !genesis.previous_block_hash.is_sentinel() {
        return Err(ChainFault::GenesisSentinel {
            field: "previousBlockHash",
        });
    }
    if !genesis.hash.is_sentinel() {
        return Err(ChainFault::GenesisSentinel { field: "hash" });
    }
    if !genesis.votes.is_empty() {
        return Err(ChainFault::GenesisSentinel { field: "votes" });
    }

    Ok(())
}
