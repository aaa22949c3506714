//! DynamoDB repository implementation.
//!
//! Implements [`UserRepository`] from `masterlist_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use masterlist_core::storage::{RepositoryError, Result, UserRepository};
use masterlist_core::user::{validate_user_id, User, MAX_USER_ID_BYTES};

use crate::config::BackendConfig;

use super::connector::{connect, ConnectError};
use super::conversions::{item_to_user, user_key, user_to_item};
use super::error::{map_get_item_error, map_put_item_error};

/// DynamoDB-based repository implementation.
///
/// The client is cheap to clone and safe to share between requests.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Connects to DynamoDB using the ambient AWS credential chain.
    pub async fn connect(config: &BackendConfig) -> std::result::Result<Self, ConnectError> {
        let client = connect(config).await?;
        Ok(Self::new(client, config.table_name.clone()))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn get_user(&self, user_id: &str) -> Result<User> {
        // DynamoDB rejects empty and oversized keys; nothing can be stored under one.
        if user_id.is_empty() || user_id.len() > MAX_USER_ID_BYTES {
            return Err(RepositoryError::user_not_found(user_id));
        }

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(user_key(user_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => item_to_user(&item),
            None => Err(RepositoryError::user_not_found(user_id)),
        }
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        validate_user_id(&user.user_id)?;

        let item = user_to_item(user);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
