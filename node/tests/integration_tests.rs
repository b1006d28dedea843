//! Integration tests exercising the full vote pipeline:
//! registration → mining → commit → validation → queries.
//!
//! These tests wire together components that are normally only connected
//! inside `node.rs`, verifying the system works end-to-end — not just in
//! isolation. Mining runs at a reduced difficulty so suites finish in
//! milliseconds; the digest and search algorithms are identical at every
//! difficulty.

use std::sync::Arc;
use std::time::Duration;

use suffrage_node::{Node, NodeConfig, NodeError};
use suffrage_types::Vote;
use suffrage_work::{Difficulty, WorkError};

fn test_config() -> NodeConfig {
    NodeConfig {
        difficulty: Difficulty::with_prefix("0"),
        mine_interval_ms: 10,
        ..NodeConfig::default()
    }
}

#[tokio::test]
async fn end_to_end_register_mine_validate_query() {
    let node = Node::new(test_config());

    assert!(node.register_vote(Vote::new("Alice", "X1", "Xavier")).await);
    assert!(node.register_vote(Vote::new("Bob", "Y2", "Yolanda")).await);
    assert!(node.register_vote(Vote::new("Carol", "x1", "xavier")).await);

    let miner = node.miner();
    let block = miner.mine_block().await.unwrap().expect("pool was not empty");
    assert_eq!(block.index, 2);
    assert_eq!(block.votes.len(), 3);

    assert!(node.chain_is_valid().await);

    // Only the x1 votes, in original submission order.
    let x1 = node.votes_for_candidate("x1").await;
    assert_eq!(x1.len(), 2);
    assert_eq!(x1[0].voter_name, "alice");
    assert_eq!(x1[1].voter_name, "carol");

    // Storage is lowercase; queries match the stored form exactly.
    assert_eq!(node.votes_for_voter("alice").await.len(), 1);
    assert!(node.votes_for_voter("Alice").await.is_empty());
}

#[tokio::test]
async fn mining_an_empty_pool_is_a_no_op() {
    let node = Node::new(test_config());
    let miner = node.miner();

    assert!(miner.mine_block().await.unwrap().is_none());
    assert_eq!(node.last_block().await.index, 1);
}

#[tokio::test]
async fn successive_blocks_extend_a_valid_chain() {
    let node = Node::new(test_config());
    let miner = node.miner();

    node.register_vote(Vote::new("alice", "x1", "xavier")).await;
    miner.mine_block().await.unwrap().expect("first block");

    node.register_vote(Vote::new("bob", "y2", "yolanda")).await;
    node.register_vote(Vote::new("carol", "x1", "xavier")).await;
    let block = miner.mine_block().await.unwrap().expect("second block");

    assert_eq!(block.index, 3);
    assert_eq!(node.last_block().await.index, 3);
    assert!(node.chain_is_valid().await);
    assert_eq!(node.votes_for_candidate("x1").await.len(), 2);
}

#[tokio::test]
async fn shutdown_cancels_an_in_flight_search() {
    // Standard difficulty: without cancellation this search would grind
    // through millions of digests.
    let node = Node::new(NodeConfig::default());
    node.register_vote(Vote::new("alice", "x1", "xavier")).await;

    node.shutdown_controller().shutdown();

    let miner = node.miner();
    let result = miner.mine_block().await;
    assert!(matches!(
        result,
        Err(NodeError::Work(WorkError::Cancelled))
    ));
    // Nothing was committed.
    assert_eq!(node.last_block().await.index, 1);
}

#[tokio::test]
async fn bootstrap_peers_land_in_the_node_registry() {
    let config = NodeConfig {
        bootstrap_peers: vec![
            "10.0.0.1:7076".to_string(),
            "10.0.0.2:7076".to_string(),
            "10.0.0.1:7076".to_string(),
        ],
        ..test_config()
    };
    let node = Node::new(config);

    assert!(node.register_node("10.0.0.3:7076").await);
    assert!(node.register_node("10.0.0.3:7076").await);

    let ledger = node.ledger();
    let guard = ledger.read().await;
    assert_eq!(guard.network_nodes().len(), 3);
}

#[tokio::test]
async fn run_loop_mines_votes_until_shutdown() {
    let node = Arc::new(Node::new(test_config()));

    let runner = {
        let node = Arc::clone(&node);
        tokio::spawn(async move { node.run().await })
    };

    node.register_vote(Vote::new("alice", "x1", "xavier")).await;

    // Wait for the run loop to pick the vote up and commit a block.
    let mut committed = false;
    for _ in 0..500 {
        if node.last_block().await.index >= 2 {
            committed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(committed, "run loop never committed the pending vote");
    assert!(node.chain_is_valid().await);

    node.shutdown_controller().shutdown();
    runner.await.unwrap();
}
