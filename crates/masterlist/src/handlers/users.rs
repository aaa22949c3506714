//! User record handlers.
//!
//! Thin wrappers over [`UserRepository`]; repository errors become HTTP
//! status codes through [`AppError`].
//!
//! [`UserRepository`]: masterlist_core::storage::UserRepository

use axum::{
    extract::{Path, State},
    Json,
};

use masterlist_core::user::{UpdateUser, User};

use crate::{handlers::AppError, state::AppState};

/// Get a single user by ID (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.user_repo.get_user(&user_id).await?;

    tracing::debug!(user_id = %user.user_id, "Fetched user");

    Ok(Json(user))
}

/// Replace a user by ID (PUT /users/{id}).
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<User>, AppError> {
    let user = payload.into_user(user_id);

    state.user_repo.put_user(&user).await?;

    tracing::info!(user_id = %user.user_id, playlist_id = %user.master_play_list_id, "Stored user");

    Ok(Json(user))
}

/// Write a full user record (POST /users).
pub async fn put_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<User>, AppError> {
    state.user_repo.put_user(&user).await?;

    tracing::info!(user_id = %user.user_id, playlist_id = %user.master_play_list_id, "Stored user");

    Ok(Json(user))
}
