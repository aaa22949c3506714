//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use masterlist_core::storage::{RepositoryError, Result, UserRepository};
use masterlist_core::user::{validate_user_id, User};

/// In-memory storage backend.
///
/// Records are stored JSON-encoded, keyed by `userId`, so reads and writes go
/// through the same encode/decode step a remote store would.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already encoded record, bypassing validation.
    #[cfg(test)]
    pub async fn insert_raw(&self, user_id: impl Into<String>, raw: impl Into<String>) {
        self.users.write().await.insert(user_id.into(), raw.into());
    }

    /// Number of stored records.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, user_id: &str) -> Result<User> {
        let users = self.users.read().await;
        let raw = users
            .get(user_id)
            .ok_or_else(|| RepositoryError::user_not_found(user_id))?;

        serde_json::from_str(raw).map_err(|e| RepositoryError::Decode(e.to_string()))
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        validate_user_id(&user.user_id)?;

        let raw = serde_json::to_string(user).map_err(|e| RepositoryError::Encode(e.to_string()))?;

        self.users.write().await.insert(user.user_id.clone(), raw);
        Ok(())
    }
}
