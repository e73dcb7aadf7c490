use axum::{
    extract::{Path, State},
    routing::{delete, get, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{extractors::AuthUser, password::hash_password},
    error::ApiError,
    state::AppState,
    users::{
        dto::{MessageResponse, UpdateUserRequest},
        repo::User,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id", get(get_user))
        .route("/users/:id", put(update_user))
        .route("/users/:id", delete(delete_user))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // The password is hashed here exactly as at registration; plaintext never
    // reaches the users table.
    let hash = hash_password(&payload.password)?;
    let affected = User::update(
        &state.db,
        id,
        &payload.username.to_lowercase(),
        &hash,
        payload.role,
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("User not found"));
    }
    info!(user_id = %id, "user updated");
    Ok(Json(MessageResponse {
        message: "User updated successfully",
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = User::delete_by_id(&state.db, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User not found"));
    }
    info!(user_id = %id, "user deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}
