//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! [`User`]. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use masterlist_core::storage::RepositoryError;
use masterlist_core::user::User;

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key of the user table.
pub const USER_ID: &str = "userId";
pub const NAME: &str = "name";
pub const MASTER_PLAYLIST_ID: &str = "masterPlayListId";
pub const MASTER_PLAYLIST_NAME: &str = "masterPlayListName";

// ============================================================================
// User conversions
// ============================================================================

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(USER_ID.to_string(), AttributeValue::S(user.user_id.clone()));
    item.insert(NAME.to_string(), AttributeValue::S(user.name.clone()));
    item.insert(
        MASTER_PLAYLIST_ID.to_string(),
        AttributeValue::S(user.master_play_list_id.clone()),
    );
    item.insert(
        MASTER_PLAYLIST_NAME.to_string(),
        AttributeValue::S(user.master_play_list_name.clone()),
    );

    item
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        name: get_string(item, NAME)?,
        user_id: get_string(item, USER_ID)?,
        master_play_list_id: get_string(item, MASTER_PLAYLIST_ID)?,
        master_play_list_name: get_string(item, MASTER_PLAYLIST_NAME)?,
    })
}

/// Key map addressing a single user record.
pub fn user_key(user_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(USER_ID.to_string(), AttributeValue::S(user_id.to_string()))])
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::Decode(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("2132", "Test").with_master_playlist("1293129", "Master")
    }

    #[test]
    fn test_user_round_trip() {
        let user = sample_user();
        let item = user_to_item(&user);
        let parsed = item_to_user(&item).unwrap();

        assert_eq!(user, parsed);
    }

    #[test]
    fn test_user_item_has_correct_attributes() {
        let item = user_to_item(&sample_user());

        assert_eq!(item.len(), 4);
        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "2132");
        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "Test");
        assert_eq!(
            item.get("masterPlayListId").unwrap().as_s().unwrap(),
            "1293129"
        );
        assert_eq!(
            item.get("masterPlayListName").unwrap().as_s().unwrap(),
            "Master"
        );
    }

    #[test]
    fn test_empty_attributes_round_trip() {
        let user = User::new("7", "");
        let parsed = item_to_user(&user_to_item(&user)).unwrap();

        assert_eq!(user, parsed);
    }

    #[test]
    fn test_user_key() {
        let key = user_key("2132");

        assert_eq!(key.len(), 1);
        assert_eq!(key.get("userId").unwrap().as_s().unwrap(), "2132");
    }

    #[test]
    fn test_missing_attribute_is_decode_error() {
        let mut item = user_to_item(&sample_user());
        item.remove(MASTER_PLAYLIST_NAME);

        let err = item_to_user(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Decode("Missing or invalid field: masterPlayListName".to_string())
        );
    }

    #[test]
    fn test_non_string_attribute_is_decode_error() {
        let mut item = user_to_item(&sample_user());
        item.insert(NAME.to_string(), AttributeValue::N("12".to_string()));

        assert!(matches!(
            item_to_user(&item),
            Err(RepositoryError::Decode(_))
        ));
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        assert!(get_string(&item, "missing").is_err());
    }
}
