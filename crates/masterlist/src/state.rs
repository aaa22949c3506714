//! Application state shared by all request handlers.

use std::sync::Arc;

use masterlist_core::storage::UserRepository;

use crate::script::PlaylistScript;

/// Shared application state.
///
/// This is cloned for each request handler. Both fields are reference
/// counted and read-only, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    /// User record store for the compiled-in backend.
    pub user_repo: Arc<dyn UserRepository>,
    /// External command that rebuilds the master playlist.
    pub playlist_script: Arc<PlaylistScript>,
}

impl AppState {
    /// Creates a new AppState with the given repository and playlist script.
    pub fn new(user_repo: Arc<dyn UserRepository>, playlist_script: PlaylistScript) -> Self {
        Self {
            user_repo,
            playlist_script: Arc::new(playlist_script),
        }
    }
}
