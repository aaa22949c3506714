use crate::storage::RepositoryError;

/// Largest partition key DynamoDB accepts, in bytes.
pub const MAX_USER_ID_BYTES: usize = 2048;

/// Validates a user id before it is used as a primary key for a write.
///
/// # Examples
///
/// ```
/// use masterlist_core::user::validate_user_id;
///
/// assert!(validate_user_id("2132").is_ok());
/// assert!(validate_user_id("").is_err());
/// ```
pub fn validate_user_id(user_id: &str) -> Result<(), RepositoryError> {
    if user_id.is_empty() {
        return Err(RepositoryError::InvalidKey(
            "userId must not be empty".to_string(),
        ));
    }
    if user_id.len() > MAX_USER_ID_BYTES {
        return Err(RepositoryError::InvalidKey(format!(
            "userId is {} bytes, the limit is {MAX_USER_ID_BYTES}",
            user_id.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_id_is_invalid() {
        assert!(matches!(
            validate_user_id(""),
            Err(RepositoryError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_oversized_user_id_is_invalid() {
        let id = "x".repeat(MAX_USER_ID_BYTES + 1);
        assert!(matches!(
            validate_user_id(&id),
            Err(RepositoryError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_max_length_user_id_is_valid() {
        let id = "x".repeat(MAX_USER_ID_BYTES);
        assert!(validate_user_id(&id).is_ok());
    }

    #[test]
    fn test_whitespace_user_id_is_valid() {
        // Only emptiness is rejected; the store accepts any non-empty string.
        assert!(validate_user_id(" ").is_ok());
    }
}
