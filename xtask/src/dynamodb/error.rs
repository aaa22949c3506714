//! Error types for DynamoDB operations.

use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Table '{table_name}' is keyed by '{found}', expected '{expected}'")]
    KeySchemaMismatch {
        table_name: String,
        expected: String,
        found: String,
    },

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Confirmation prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_failure_is_not_an_aws_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotConnected, "not a terminal");
        let err = DynamodbError::from(dialoguer::Error::IO(io_err));

        assert!(matches!(err, DynamodbError::Prompt(_)));
        assert!(err.to_string().contains("not a terminal"));
    }
}
