//! Vote-ledger node — the glue around the core ledger.
//!
//! Hosts the concerns the core deliberately leaves outside: TOML
//! configuration, structured logging, graceful shutdown, and the
//! cancellable mining worker that seals pending votes into blocks
//! without ever blocking ledger reads or vote registration.

pub mod config;
pub mod error;
pub mod logging;
pub mod miner;
pub mod node;
pub mod shutdown;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use miner::Miner;
pub use node::Node;
pub use shutdown::ShutdownController;
