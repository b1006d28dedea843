//! Node configuration with TOML file support.

use std::path::Path;

use serde::{Deserialize, Serialize};

use suffrage_work::Difficulty;

use crate::NodeError;

/// Configuration for a vote-ledger node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Peer addresses registered into the node set at startup.
    #[serde(default)]
    pub bootstrap_peers: Vec<String>,

    /// Idle delay between mining cycles when the pending pool is empty.
    #[serde(default = "default_mine_interval_ms")]
    pub mine_interval_ms: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Difficulty target (programmatic only, not read from TOML;
    /// defaults to the standard target).
    #[serde(skip)]
    pub difficulty: Difficulty,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_mine_interval_ms() -> u64 {
    250
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bootstrap_peers: Vec::new(),
            mine_interval_ms: default_mine_interval_ms(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            difficulty: Difficulty::standard(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file. Missing fields fall back to
    /// their defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
