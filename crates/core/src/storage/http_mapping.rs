//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `InvalidKey` -> 400 (Bad Request)
/// - `BackendUnavailable` -> 503 (Service Unavailable)
/// - `Decode` -> 500 (Internal Server Error)
/// - `Encode` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use masterlist_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::user_not_found("9999");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidKey(_) => 400,
        RepositoryError::BackendUnavailable(_) => 503,
        RepositoryError::Decode(_) => 500,
        RepositoryError::Encode(_) => 500,
    }
}
