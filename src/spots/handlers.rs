use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AdminUser,
    error::ApiError,
    spots::{
        dto::{AssignSpotRequest, CreateSpotRequest, CreateSpotResponse},
        repo::ParkingSpot,
    },
    state::AppState,
    users::dto::MessageResponse,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/parking-spots", post(create_spot))
        .route("/parking-spots/:id/assign", post(assign_spot))
        .route("/parking-spots/:id/unassign", post(unassign_spot))
        .route("/parking-spots/free/:floor", get(free_spots_by_floor))
        .route("/users/:id/parking-spot", get(spot_by_user))
}

#[instrument(skip(state, payload))]
pub async fn create_spot(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Json(payload): Json<CreateSpotRequest>,
) -> Result<(StatusCode, Json<CreateSpotResponse>), ApiError> {
    let id = ParkingSpot::create(&state.db, payload.spot_number, payload.floor).await?;
    info!(spot_id = %id, admin_id = %caller, "parking spot created");
    Ok((
        StatusCode::CREATED,
        Json(CreateSpotResponse {
            id,
            message: "Parking spot created successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn assign_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AssignSpotRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected =
        ParkingSpot::assign(&state.db, id, payload.user_id, payload.occupancy_time).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Parking spot not found"));
    }
    info!(spot_id = %id, user_id = %payload.user_id, "parking spot assigned");
    Ok(Json(MessageResponse {
        message: "Parking spot assigned successfully",
    }))
}

#[instrument(skip(state))]
pub async fn unassign_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = ParkingSpot::unassign(&state.db, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Parking spot not found"));
    }
    info!(spot_id = %id, "parking spot unassigned");
    Ok(Json(MessageResponse {
        message: "Parking spot unassigned successfully",
    }))
}

#[instrument(skip(state))]
pub async fn free_spots_by_floor(
    State(state): State<AppState>,
    Path(floor): Path<i32>,
) -> Result<Json<Vec<ParkingSpot>>, ApiError> {
    let spots = ParkingSpot::free_by_floor(&state.db, floor).await?;
    Ok(Json(spots))
}

#[instrument(skip(state))]
pub async fn spot_by_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkingSpot>, ApiError> {
    let spot = ParkingSpot::find_by_user(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Parking spot not found for the user"))?;
    Ok(Json(spot))
}
