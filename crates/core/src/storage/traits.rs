use async_trait::async_trait;

use crate::user::User;

use super::Result;

/// Repository for user records, keyed by `userId`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by id.
    ///
    /// Returns [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// when no record exists, including for ids no write could have used
    /// (empty, or longer than [`MAX_USER_ID_BYTES`](crate::user::MAX_USER_ID_BYTES)).
    async fn get_user(&self, user_id: &str) -> Result<User>;

    /// Writes the whole record, replacing any existing one with the same id.
    ///
    /// Rejects an empty id with
    /// [`RepositoryError::InvalidKey`](super::RepositoryError::InvalidKey)
    /// without writing anything.
    async fn put_user(&self, user: &User) -> Result<()>;
}
