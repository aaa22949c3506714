use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Every variant is recoverable and is returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl RepositoryError {
    /// Shorthand for a missing user record.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
