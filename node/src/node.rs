//! Node — owns the shared ledger and drives the mining loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};

use suffrage_ledger::{genesis_block, Blockchain};
use suffrage_types::{Block, Vote};
use suffrage_work::WorkGenerator;

use crate::config::NodeConfig;
use crate::miner::Miner;
use crate::shutdown::ShutdownController;

/// A single vote-ledger node: the ledger behind a lock, a mining
/// worker, and a shutdown controller.
///
/// The lock serializes mutations from concurrent vote submissions and
/// the commit step of a mining cycle; reads (queries, validation) share
/// the read side.
pub struct Node {
    ledger: Arc<RwLock<Blockchain>>,
    shutdown: ShutdownController,
    config: NodeConfig,
}

impl Node {
    /// Build a node from config: seeds the genesis block and registers
    /// the bootstrap peers.
    pub fn new(config: NodeConfig) -> Self {
        let mut ledger = Blockchain::with_difficulty(config.difficulty.clone());
        ledger.seed_genesis(genesis_block());
        for peer in &config.bootstrap_peers {
            ledger.register_node(peer.clone());
        }
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            shutdown: ShutdownController::new(),
            config,
        }
    }

    /// Shared handle to the ledger, for embedding callers.
    pub fn ledger(&self) -> Arc<RwLock<Blockchain>> {
        Arc::clone(&self.ledger)
    }

    pub fn shutdown_controller(&self) -> &ShutdownController {
        &self.shutdown
    }

    pub async fn register_vote(&self, vote: Vote) -> bool {
        self.ledger.write().await.register_vote(vote)
    }

    pub async fn register_node(&self, address: impl Into<String>) -> bool {
        self.ledger.write().await.register_node(address)
    }

    pub async fn votes_for_candidate(&self, candidate_id: &str) -> Vec<Vote> {
        self.ledger.read().await.votes_for_candidate(candidate_id)
    }

    pub async fn votes_for_voter(&self, voter_name: &str) -> Vec<Vote> {
        self.ledger.read().await.votes_for_voter(voter_name)
    }

    pub async fn chain_is_valid(&self) -> bool {
        self.ledger.read().await.chain_is_valid()
    }

    pub async fn last_block(&self) -> Block {
        self.ledger.read().await.last_block().clone()
    }

    /// Construct the mining worker bound to this node's ledger and
    /// shutdown signal.
    pub fn miner(&self) -> Miner {
        Miner::new(
            self.ledger(),
            WorkGenerator::with_difficulty(self.config.difficulty.clone()),
            self.shutdown.cancel_flag(),
        )
    }

    /// Mine pending votes until shutdown, sleeping between cycles when
    /// there is nothing to seal.
    pub async fn run(&self) {
        let miner = self.miner();
        let mut shutdown_rx = self.shutdown.subscribe();
        let idle = Duration::from_millis(self.config.mine_interval_ms);

        info!("node running");
        loop {
            // Covers a shutdown triggered before this loop subscribed.
            if *shutdown_rx.borrow_and_update() {
                info!("shutdown received, stopping miner");
                return;
            }

            tokio::select! {
                _ = shutdown_rx.changed() => {}
                result = miner.mine_block() => {
                    match result {
                        Ok(Some(_)) => {}
                        Ok(None) => tokio::time::sleep(idle).await,
                        Err(err) => {
                            warn!(%err, "mining aborted");
                            return;
                        }
                    }
                }
            }
        }
    }
}
