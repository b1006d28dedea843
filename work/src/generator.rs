//! Nonce search (multi-threaded CPU).

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::digest::hash_block;
use crate::{Difficulty, WorkError, WorkNonce};

/// Searches for the first nonce whose digest meets the difficulty.
///
/// The scan starts at 0 and is strictly increasing, so for fixed inputs
/// the same nonce is always found — reproducibility every validator
/// relies on.
pub struct WorkGenerator {
    difficulty: Difficulty,
}

/// Nonces evaluated per parallel window before re-checking cancellation.
const WINDOW: u64 = 4096;

impl WorkGenerator {
    /// A generator at the standard difficulty target.
    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::standard(),
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// Find the first satisfying nonce, scanning from 0.
    ///
    /// Blocks the calling thread until a nonce is found; the search has
    /// no upper bound. Callers that need to abort a stuck search use
    /// [`WorkGenerator::generate_cancellable`] instead.
    pub fn generate(&self, previous_hash: &str, block_data: &str) -> WorkNonce {
        match self.generate_cancellable(previous_hash, block_data, &AtomicBool::new(false)) {
            Ok(nonce) => nonce,
            Err(WorkError::Cancelled) => {
                unreachable!("search without a shared cancel flag cannot be cancelled")
            }
        }
    }

    /// Find the first satisfying nonce, aborting once `cancel` is set.
    ///
    /// Consecutive windows of nonces are evaluated in parallel and the
    /// lowest hit inside a window is taken; every smaller nonce was
    /// already rejected in an earlier window, so the result is still the
    /// globally first match. The flag is polled between windows, which
    /// bounds cancellation latency to one window of digests.
    pub fn generate_cancellable(
        &self,
        previous_hash: &str,
        block_data: &str,
        cancel: &AtomicBool,
    ) -> Result<WorkNonce, WorkError> {
        let mut start: u64 = 0;
        loop {
            if cancel.load(Ordering::Relaxed) {
                return Err(WorkError::Cancelled);
            }

            let end = start.saturating_add(WINDOW);
            let hit = (start..end)
                .into_par_iter()
                .filter(|&nonce| {
                    self.difficulty
                        .is_met_by(&hash_block(previous_hash, block_data, nonce))
                })
                .min();

            if let Some(nonce) = hit {
                return Ok(WorkNonce(nonce));
            }
            start = end;
        }
    }
}

impl Default for WorkGenerator {
    fn default() -> Self {
        Self::new()
    }
}
