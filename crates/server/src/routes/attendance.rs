use super::{deleted, found};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::attendance,
    services::attendance::{AttendanceInput, AttendanceService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_attendance, mark_attendance))
        .routes(routes!(get_attendance, update_attendance, delete_attendance))
}

/// List all attendance marks
#[utoipa::path(
    get,
    path = "/attendance",
    responses(
        (status = 200, description = "All attendance marks", body = Vec<attendance::Model>)
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<attendance::Model>>, ApiError> {
    Ok(Json(AttendanceService::list(&state.db).await?))
}

/// Record an attendance mark
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = AttendanceInput,
    responses(
        (status = 201, description = "Attendance created", body = attendance::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(input): Json<AttendanceInput>,
) -> Result<(StatusCode, Json<attendance::Model>), ApiError> {
    let created = AttendanceService::mark(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific attendance mark by ID
#[utoipa::path(
    get,
    path = "/attendance/{id}",
    params(("id" = Uuid, Path, description = "Attendance ID")),
    responses(
        (status = 200, description = "Attendance found", body = attendance::Model),
        (status = 404, description = "Attendance not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<attendance::Model>, ApiError> {
    found(AttendanceService::get(&state.db, id).await?, "Attendance")
}

/// Replace a attendance mark
#[utoipa::path(
    put,
    path = "/attendance/{id}",
    params(("id" = Uuid, Path, description = "Attendance ID")),
    request_body = AttendanceInput,
    responses(
        (status = 200, description = "Attendance updated", body = attendance::Model),
        (status = 404, description = "Attendance not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AttendanceInput>,
) -> Result<Json<attendance::Model>, ApiError> {
    found(AttendanceService::update(&state.db, id, input).await?, "Attendance")
}

/// Delete a attendance mark
#[utoipa::path(
    delete,
    path = "/attendance/{id}",
    params(("id" = Uuid, Path, description = "Attendance ID")),
    responses(
        (status = 204, description = "Attendance deleted"),
        (status = 404, description = "Attendance not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(AttendanceService::delete(&state.db, id).await?, "Attendance")
}
