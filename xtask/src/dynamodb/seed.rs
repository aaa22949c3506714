//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use masterlist_core::user::{validate_user_id, User};
use std::collections::HashMap;

/// Build the user record to seed, rejecting ids the table would refuse.
pub fn build_seed_user(
    user_id: &str,
    name: &str,
    playlist_id: &str,
    playlist_name: &str,
) -> Result<User> {
    validate_user_id(user_id).map_err(|e| DynamodbError::InvalidUser(e.to_string()))?;
    Ok(User::new(user_id, name).with_master_playlist(playlist_id, playlist_name))
}

/// Convert a User to a DynamoDB item.
fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("userId".to_string(), AttributeValue::S(user.user_id.clone())),
        ("name".to_string(), AttributeValue::S(user.name.clone())),
        (
            "masterPlayListId".to_string(),
            AttributeValue::S(user.master_play_list_id.clone()),
        ),
        (
            "masterPlayListName".to_string(),
            AttributeValue::S(user.master_play_list_name.clone()),
        ),
    ])
}

/// Write the user into the table, replacing any record with the same id.
pub async fn seed_user(client: &Client, table_name: &str, user: &User) -> Result<()> {
    client
        .put_item()
        .table_name(table_name)
        .set_item(Some(user_to_item(user)))
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    Ok(())
}
