//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`UserRepository`]
//! defined in `masterlist_core::storage`. The backend is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local backend, data is lost on restart
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p masterlist
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p masterlist --no-default-features --features inmemory
//! ```

use std::sync::Arc;

use masterlist_core::storage::UserRepository;

use crate::config::Config;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p masterlist --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

/// Creates the user repository for the compiled-in backend.
///
/// Runs once at startup. An error here means the process cannot serve
/// requests at all (e.g. no AWS credentials).
#[cfg(feature = "dynamodb")]
pub async fn create_user_repository(config: &Config) -> anyhow::Result<Arc<dyn UserRepository>> {
    let backend = config.backend_config();
    let repo = dynamodb::DynamoDbRepository::connect(&backend).await?;

    tracing::info!(
        table = %repo.table_name(),
        endpoint = backend.endpoint_url.as_deref().unwrap_or("aws"),
        timeout = ?backend.operation_timeout,
        "Connected to DynamoDB"
    );

    Ok(Arc::new(repo))
}

/// Creates the user repository for the compiled-in backend.
#[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
pub async fn create_user_repository(_config: &Config) -> anyhow::Result<Arc<dyn UserRepository>> {
    tracing::warn!("Using in-memory storage, user records will not survive a restart");
    Ok(Arc::new(inmemory::InMemoryRepository::new()))
}
