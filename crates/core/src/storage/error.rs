use thiserror::Error;

/// Errors that can occur when constructing a list limit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListLimitError {
    #[error("List limit must be at least 1")]
    Zero,
    #[error("List limit {0} exceeds the maximum of {max}", max = super::ListLimit::MAX)]
    TooLarge(u32),
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored row is missing attributes or holds malformed values.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
