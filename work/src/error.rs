use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkError {
    #[error("nonce search cancelled")]
    Cancelled,
}
