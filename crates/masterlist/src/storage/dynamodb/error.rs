//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `masterlist_core::storage`.
//! A missing record is not an SDK error (GetItem succeeds with no item), so
//! SDK failures land in `BackendUnavailable` unless DynamoDB rejected the
//! request itself with a `ValidationException`, which no retry can fix.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use masterlist_core::storage::RepositoryError;

/// Describe failures that happened before DynamoDB produced a service error.
fn transport_failure<E, R>(err: &SdkError<E, R>) -> Option<&'static str> {
    match err {
        SdkError::TimeoutError(_) => Some("timed out"),
        SdkError::DispatchFailure(_) => Some("could not reach DynamoDB"),
        SdkError::ResponseError(_) => Some("received an unreadable response"),
        SdkError::ConstructionFailure(_) => Some("could not build the request"),
        _ => None,
    }
}

/// DynamoDB's error code for requests it refuses to process as written.
const VALIDATION_EXCEPTION: &str = "ValidationException";

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(reason) = transport_failure(&err) {
        return RepositoryError::BackendUnavailable(format!("GetItem {reason}"));
    }

    let service_err = err.into_service_error();
    if service_err.code() == Some(VALIDATION_EXCEPTION) {
        return RepositoryError::InvalidKey(
            service_err
                .message()
                .unwrap_or("GetItem rejected the key")
                .to_string(),
        );
    }

    match service_err {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::BackendUnavailable("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::BackendUnavailable("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::BackendUnavailable("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::BackendUnavailable("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::BackendUnavailable(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(reason) = transport_failure(&err) {
        return RepositoryError::BackendUnavailable(format!("PutItem {reason}"));
    }

    let service_err = err.into_service_error();
    if service_err.code() == Some(VALIDATION_EXCEPTION) {
        return RepositoryError::Encode(
            service_err
                .message()
                .unwrap_or("PutItem rejected the item")
                .to_string(),
        );
    }

    match service_err {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::BackendUnavailable("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::BackendUnavailable("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::BackendUnavailable("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::BackendUnavailable("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::BackendUnavailable("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::BackendUnavailable("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::BackendUnavailable(format!("PutItem failed: {:?}", err)),
    }
}
