use super::{deleted, found, require};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::{session, timetable},
    services::timetable::{TimetableInput, TimetableService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_timetables, create_timetable))
        .routes(routes!(get_timetable, update_timetable, delete_timetable))
        .routes(routes!(timetable_sessions))
}

/// List all timetable entries
#[utoipa::path(
    get,
    path = "/timetables",
    responses(
        (status = 200, description = "All timetable entries", body = Vec<timetable::Model>)
    ),
    security(("jwt" = [])),
    tag = "Timetables"
)]
pub async fn list_timetables(
    State(state): State<AppState>,
) -> Result<Json<Vec<timetable::Model>>, ApiError> {
    Ok(Json(TimetableService::list(&state.db).await?))
}

/// Create a timetable entry
#[utoipa::path(
    post,
    path = "/timetables",
    request_body = TimetableInput,
    responses(
        (status = 201, description = "Timetable created", body = timetable::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Timetables"
)]
pub async fn create_timetable(
    State(state): State<AppState>,
    Json(input): Json<TimetableInput>,
) -> Result<(StatusCode, Json<timetable::Model>), ApiError> {
    let created = TimetableService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific timetable entry by ID
#[utoipa::path(
    get,
    path = "/timetables/{id}",
    params(("id" = Uuid, Path, description = "Timetable ID")),
    responses(
        (status = 200, description = "Timetable found", body = timetable::Model),
        (status = 404, description = "Timetable not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Timetables"
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<timetable::Model>, ApiError> {
    found(TimetableService::get(&state.db, id).await?, "Timetable")
}

/// Replace a timetable entry
#[utoipa::path(
    put,
    path = "/timetables/{id}",
    params(("id" = Uuid, Path, description = "Timetable ID")),
    request_body = TimetableInput,
    responses(
        (status = 200, description = "Timetable updated", body = timetable::Model),
        (status = 404, description = "Timetable not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Timetables"
)]
pub async fn update_timetable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<TimetableInput>,
) -> Result<Json<timetable::Model>, ApiError> {
    found(TimetableService::update(&state.db, id, input).await?, "Timetable")
}

/// Delete a timetable entry
#[utoipa::path(
    delete,
    path = "/timetables/{id}",
    params(("id" = Uuid, Path, description = "Timetable ID")),
    responses(
        (status = 204, description = "Timetable deleted"),
        (status = 404, description = "Timetable not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Timetables"
)]
pub async fn delete_timetable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(TimetableService::delete(&state.db, id).await?, "Timetable")
}

/// Sessions held for a timetable entry, by date
#[utoipa::path(
    get,
    path = "/timetables/{id}/sessions",
    params(("id" = Uuid, Path, description = "Timetable ID")),
    responses(
        (status = 200, description = "Sessions of the timetable entry", body = Vec<session::Model>),
        (status = 404, description = "Timetable entry not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Timetables"
)]
pub async fn timetable_sessions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<session::Model>>, ApiError> {
    require(TimetableService::get(&state.db, id).await?, "Timetable")?;

    Ok(Json(TimetableService::sessions(&state.db, id).await?))
}
