use super::{deleted, found};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::lecture_slot,
    services::lecture_slot::{LectureSlotInput, LectureSlotService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_lecture_slots, create_lecture_slot))
        .routes(routes!(get_lecture_slot, update_lecture_slot, delete_lecture_slot))
}

/// List all lecture slots
#[utoipa::path(
    get,
    path = "/lecture-slots",
    responses(
        (status = 200, description = "All lecture slots, by start time", body = Vec<lecture_slot::Model>)
    ),
    security(("jwt" = [])),
    tag = "Lecture slots"
)]
pub async fn list_lecture_slots(
    State(state): State<AppState>,
) -> Result<Json<Vec<lecture_slot::Model>>, ApiError> {
    Ok(Json(LectureSlotService::list(&state.db).await?))
}

/// Create a lecture slot
#[utoipa::path(
    post,
    path = "/lecture-slots",
    request_body = LectureSlotInput,
    responses(
        (status = 201, description = "Lecture slot created", body = lecture_slot::Model),
        (status = 422, description = "End time is not after start time", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Lecture slots"
)]
pub async fn create_lecture_slot(
    State(state): State<AppState>,
    Json(input): Json<LectureSlotInput>,
) -> Result<(StatusCode, Json<lecture_slot::Model>), ApiError> {
    let created = LectureSlotService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific lecture slot by ID
#[utoipa::path(
    get,
    path = "/lecture-slots/{id}",
    params(("id" = Uuid, Path, description = "Lecture slot ID")),
    responses(
        (status = 200, description = "Lecture slot found", body = lecture_slot::Model),
        (status = 404, description = "Lecture slot not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Lecture slots"
)]
pub async fn get_lecture_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<lecture_slot::Model>, ApiError> {
    found(LectureSlotService::get(&state.db, id).await?, "Lecture slot")
}

/// Replace a lecture slot
#[utoipa::path(
    put,
    path = "/lecture-slots/{id}",
    params(("id" = Uuid, Path, description = "Lecture slot ID")),
    request_body = LectureSlotInput,
    responses(
        (status = 200, description = "Lecture slot updated", body = lecture_slot::Model),
        (status = 404, description = "Lecture slot not found", body = ErrorResponse),
        (status = 422, description = "End time is not after start time", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Lecture slots"
)]
pub async fn update_lecture_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<LectureSlotInput>,
) -> Result<Json<lecture_slot::Model>, ApiError> {
    found(LectureSlotService::update(&state.db, id, input).await?, "Lecture slot")
}

/// Delete a lecture slot
#[utoipa::path(
    delete,
    path = "/lecture-slots/{id}",
    params(("id" = Uuid, Path, description = "Lecture slot ID")),
    responses(
        (status = 204, description = "Lecture slot deleted"),
        (status = 404, description = "Lecture slot not found", body = ErrorResponse),
        (status = 409, description = "Lecture slot is still used by a timetable", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Lecture slots"
)]
pub async fn delete_lecture_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(LectureSlotService::delete(&state.db, id).await?, "Lecture slot")
}
