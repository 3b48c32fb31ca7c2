use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("no drawing titled {0:?}")]
    NotFound(String),
    #[error("failed to persist drawings: {0}")]
    Write(String),
    #[error("failed to capture surface: {0}")]
    Capture(String),
}

