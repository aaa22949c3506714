//! DynamoDB client setup (Imperative Shell).
//!
//! Credentials and region come from the ambient AWS chain (environment,
//! shared config files, instance metadata); the only explicit inputs are the
//! overrides in [`BackendConfig`].

use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_dynamodb::Client;
use thiserror::Error;

use crate::config::BackendConfig;

/// Startup failures while building the DynamoDB client.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("No AWS region configured; set AWS_REGION or a region in ~/.aws/config")]
    MissingRegion,

    #[error("No AWS credentials provider available")]
    MissingCredentials,

    #[error("Failed to resolve AWS credentials: {0}")]
    Credentials(String),
}

/// Creates a DynamoDB client with the given configuration.
///
/// Every operation issued through the returned client is bounded by
/// `operation_timeout`. Credentials are resolved eagerly so a missing
/// credential chain fails here instead of on the first request.
pub async fn connect(config: &BackendConfig) -> Result<Client, ConnectError> {
    let timeouts = TimeoutConfig::builder()
        .operation_timeout(config.operation_timeout)
        .build();

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(timeouts);

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    if sdk_config.region().is_none() {
        return Err(ConnectError::MissingRegion);
    }

    let provider = sdk_config
        .credentials_provider()
        .ok_or(ConnectError::MissingCredentials)?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| ConnectError::Credentials(e.to_string()))?;

    Ok(Client::new(&sdk_config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_error_display() {
        assert_eq!(
            ConnectError::Credentials("no profile".to_string()).to_string(),
            "Failed to resolve AWS credentials: no profile"
        );
        assert_eq!(
            ConnectError::MissingCredentials.to_string(),
            "No AWS credentials provider available"
        );
    }
}
