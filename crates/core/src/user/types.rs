use serde::{Deserialize, Serialize};

/// A user and the master playlist that belongs to them.
///
/// Field names on the wire (JSON and DynamoDB attributes) are camelCase:
/// `name`, `userId`, `masterPlayListId`, `masterPlayListName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    /// Primary key of the user table.
    pub user_id: String,
    pub master_play_list_id: String,
    pub master_play_list_name: String,
}

impl User {
    /// Creates a user with the given id and display name and no playlist.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_id: user_id.into(),
            master_play_list_id: String::new(),
            master_play_list_name: String::new(),
        }
    }

    /// Sets the master playlist for this user.
    pub fn with_master_playlist(
        mut self,
        playlist_id: impl Into<String>,
        playlist_name: impl Into<String>,
    ) -> Self {
        self.master_play_list_id = playlist_id.into();
        self.master_play_list_name = playlist_name.into();
        self
    }
}
