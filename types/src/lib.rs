//! Fundamental types for the suffrage vote ledger.
//!
//! This crate defines the core types shared across every other crate in
//! the workspace: votes, blocks, digests, and timestamps.

pub mod block;
pub mod digest;
pub mod time;
pub mod vote;

pub use block::Block;
pub use digest::BlockDigest;
pub use time::Timestamp;
pub use vote::Vote;
