//! Append-only, tamper-evident vote ledger.
//!
//! Votes accumulate in a pending pool until a miner finds a nonce whose
//! digest meets the difficulty target; the pool is then sealed into a
//! block bound to its predecessor by digest. Any party holding a copy of
//! the chain can re-derive every proof and reject a tampered history.

pub mod blockchain;
pub mod genesis;
pub mod payload;
pub mod queries;
pub mod validation;

pub use blockchain::Blockchain;
pub use genesis::{genesis_block, GENESIS_NONCE};
pub use payload::encode_payload;
pub use validation::ChainFault;
