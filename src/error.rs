use thiserror::Error;

/// Result type for tree-induction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tree-induction and bagging operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("dataset is empty: need at least one row and one feature column")]
    EmptyDataset,

    #[error("ensemble size must be at least 1")]
    EmptyEnsemble,

    #[error("invalid parameter value: {0}")]
    InvalidParameter(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}
