//! Master playlist handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

/// Response body for a playlist run.
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub message: String,
}

/// Rebuild the master playlist (GET /create-master-playlist).
///
/// Waits for the script to finish. Script output goes to the log only.
pub async fn create_master_playlist(
    State(state): State<AppState>,
) -> (StatusCode, Json<PlaylistResponse>) {
    match state.playlist_script.run().await {
        Ok(output) => {
            tracing::info!(
                stdout_bytes = output.stdout.len(),
                stderr_bytes = output.stderr.len(),
                "Master playlist script finished"
            );
            (
                StatusCode::OK,
                Json(PlaylistResponse {
                    message: "Master playlist updated".to_string(),
                }),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Master playlist script failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(PlaylistResponse {
                    message: e.to_string(),
                }),
            )
        }
    }
}
