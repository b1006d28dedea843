//! The ledger — committed chain, pending pool, node registry.

use std::collections::HashSet;
use std::mem;

use suffrage_types::{Block, BlockDigest, Timestamp, Vote};
use suffrage_work::Difficulty;

use crate::payload::encode_payload;
use crate::validation::{self, ChainFault};

/// An append-only, tamper-evident vote ledger.
///
/// Owns the committed chain, the pool of votes awaiting inclusion, and
/// the registry of known node addresses; nothing else mutates them. All
/// mutation flows through `&mut self`, so a shared instance serializes
/// writers by construction — concurrent callers wrap it in a lock (see
/// the node crate).
pub struct Blockchain {
    pub(crate) chain: Vec<Block>,
    pending_votes: Vec<Vote>,
    network_nodes: HashSet<String>,
    difficulty: Difficulty,
}

impl Blockchain {
    /// An empty, unseeded ledger at the standard difficulty.
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::standard())
    }

    /// An empty ledger validating against a custom difficulty
    /// (tests, dev networks).
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            chain: Vec::new(),
            pending_votes: Vec::new(),
            network_nodes: HashSet::new(),
            difficulty,
        }
    }

    /// Install the genesis block on an empty chain.
    ///
    /// Every other operation assumes this has happened first.
    ///
    /// # Panics
    ///
    /// Panics if the chain has already been seeded.
    pub fn seed_genesis(&mut self, genesis: Block) -> &Block {
        assert!(
            self.chain.is_empty(),
            "genesis may only seed an empty chain"
        );
        self.chain.push(genesis);
        &self.chain[0]
    }

    /// Accept a vote into the pending pool.
    ///
    /// Fields are case-folded here, at the boundary, and never again.
    /// Always succeeds: no duplicate detection, no identity check.
    pub fn register_vote(&mut self, vote: Vote) -> bool {
        self.pending_votes.push(vote.normalized());
        true
    }

    /// Record a peer address. Membership only — duplicates are ignored
    /// and no liveness is tracked.
    pub fn register_node(&mut self, address: impl Into<String>) -> bool {
        self.network_nodes.insert(address.into());
        true
    }

    /// Seal the pending pool into a new block and append it.
    ///
    /// The pool is captured by value and cleared in the same step, so a
    /// vote can never end up both in this block and in the next pool.
    /// No validation happens here — miners are trusted to supply a nonce
    /// and digest that pass the read-side checks.
    pub fn create_block(
        &mut self,
        nonce: u64,
        previous_block_hash: BlockDigest,
        hash: BlockDigest,
    ) -> Block {
        let block = Block {
            index: self.chain.len() as u64 + 1,
            votes: mem::take(&mut self.pending_votes),
            timestamp: Timestamp::now(),
            nonce,
            hash,
            previous_block_hash,
        };
        self.chain.push(block.clone());
        block
    }

    /// The most recently committed block.
    ///
    /// # Panics
    ///
    /// Panics if the chain was never seeded with a genesis block.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain must be seeded with a genesis block")
    }

    /// Whether `candidate` extends the current head: its stored
    /// predecessor digest matches the head's hash AND its index is
    /// exactly one past the head's.
    pub fn is_valid_successor(&self, candidate: &Block) -> bool {
        let last = self.last_block();
        candidate.previous_block_hash == last.hash && candidate.index == last.index + 1
    }

    /// The canonical preimage a miner must hash to extend this chain.
    ///
    /// The payload index trails the head's index by one — the same
    /// formula re-validation applies to every committed block — so a
    /// chain mined from this preimage re-verifies.
    pub fn pending_payload(&self) -> String {
        let last = self.last_block();
        encode_payload(last.index.saturating_sub(1), &self.pending_votes)
    }

    /// Boolean verdict over the whole chain.
    pub fn chain_is_valid(&self) -> bool {
        self.validate_chain().is_ok()
    }

    /// Full re-derivation of the chain, reporting the first fault found.
    ///
    /// The public contract stays the boolean verdict; this is the
    /// diagnostic behind it.
    pub fn validate_chain(&self) -> Result<(), ChainFault> {
        validation::validate_chain(&self.chain, &self.difficulty)
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending_votes(&self) -> &[Vote] {
        &self.pending_votes
    }

    pub fn network_nodes(&self) -> &HashSet<String> {
        &self.network_nodes
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}
