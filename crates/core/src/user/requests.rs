//! API request types for user operations.

use serde::{Deserialize, Serialize};

use super::types::User;

/// Request payload for replacing a user whose id comes from the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: String,
    pub master_play_list_id: String,
    pub master_play_list_name: String,
}

impl UpdateUser {
    /// Combines the payload with the path id into a full record.
    pub fn into_user(self, user_id: impl Into<String>) -> User {
        User {
            name: self.name,
            user_id: user_id.into(),
            master_play_list_id: self.master_play_list_id,
            master_play_list_name: self.master_play_list_name,
        }
    }
}
