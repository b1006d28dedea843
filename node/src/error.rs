use thiserror::Error;

use suffrage_work::WorkError;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Work(#[from] WorkError),
}
