use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors that can occur while writing to the blob store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlobStoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Write failed for {key}: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
