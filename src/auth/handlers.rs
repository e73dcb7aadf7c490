use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::repo::User,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // Uniqueness probe is an exact, case-sensitive match on the given name;
    // the stored username is lowercased below.
    let existing = User::count_by_username(&state.db, &payload.username).await?;
    if existing > 0 {
        warn!(username = %payload.username, "username already exists");
        return Err(ApiError::UsernameTaken);
    }

    let hash = hash_password(&payload.password)?;
    let id = User::insert(
        &state.db,
        &payload.username.to_lowercase(),
        &hash,
        payload.role,
    )
    .await?;

    info!(user_id = %id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id,
            message: "User created successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = match User::find_by_username(&state.db, &payload.username).await? {
        Some(u) => u,
        None => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        id: user.id,
        username: user.username,
        token,
    }))
}
