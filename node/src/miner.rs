//! Cancellable mining worker.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use suffrage_ledger::Blockchain;
use suffrage_types::Block;
use suffrage_work::{hash_block, WorkGenerator};

use crate::NodeError;

/// Seals pending votes into blocks without holding the ledger lock
/// during the nonce search.
///
/// A cycle snapshots the chain head and the canonical pending payload
/// under a read lock, searches for a nonce on a blocking worker thread,
/// then commits under the write lock only if neither the head nor the
/// payload moved in the meantime. A vote that arrives mid-search changes
/// the payload, so its stale nonce is discarded and the cycle restarts —
/// the vote lands entirely in the next block, never split.
pub struct Miner {
    ledger: Arc<RwLock<Blockchain>>,
    generator: Arc<WorkGenerator>,
    cancel: Arc<AtomicBool>,
}

impl Miner {
    pub fn new(
        ledger: Arc<RwLock<Blockchain>>,
        generator: WorkGenerator,
        cancel: Arc<AtomicBool>,
    ) -> Self {
        Self {
            ledger,
            generator: Arc::new(generator),
            cancel,
        }
    }

    /// Run mining cycles until a block commits or the search is
    /// cancelled. Returns `Ok(None)` when the pending pool is empty.
    pub async fn mine_block(&self) -> Result<Option<Block>, NodeError> {
        loop {
            let (previous_hash, payload) = {
                let ledger = self.ledger.read().await;
                if ledger.pending_votes().is_empty() {
                    return Ok(None);
                }
                (ledger.last_block().hash.clone(), ledger.pending_payload())
            };

            let generator = Arc::clone(&self.generator);
            let cancel = Arc::clone(&self.cancel);
            let search_prev = previous_hash.clone();
            let search_data = payload.clone();
            let nonce = tokio::task::spawn_blocking(move || {
                generator.generate_cancellable(search_prev.as_str(), &search_data, &cancel)
            })
            .await
            .expect("nonce search task panicked")?;

            let mut ledger = self.ledger.write().await;
            if ledger.last_block().hash != previous_hash || ledger.pending_payload() != payload {
                debug!(nonce = nonce.0, "discarding stale nonce, ledger advanced mid-search");
                continue;
            }

            let digest = hash_block(previous_hash.as_str(), &payload, nonce.0);
            let block = ledger.create_block(nonce.0, previous_hash, digest);
            info!(
                index = block.index,
                votes = block.votes.len(),
                hash = %block.hash,
                "block committed"
            );
            return Ok(Some(block));
        }
    }
}
