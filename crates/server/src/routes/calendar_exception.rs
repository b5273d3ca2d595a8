use super::{deleted, found};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::calendar_exception,
    services::calendar_exception::{CalendarExceptionInput, CalendarExceptionService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_calendar_exceptions, create_calendar_exception))
        .routes(routes!(get_calendar_exception, update_calendar_exception, delete_calendar_exception))
}

/// List all calendar exceptions
#[utoipa::path(
    get,
    path = "/calendar-exceptions",
    responses(
        (status = 200, description = "All calendar exceptions, by date", body = Vec<calendar_exception::Model>)
    ),
    security(("jwt" = [])),
    tag = "Calendar exceptions"
)]
pub async fn list_calendar_exceptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<calendar_exception::Model>>, ApiError> {
    Ok(Json(CalendarExceptionService::list(&state.db).await?))
}

/// Create a calendar exception
#[utoipa::path(
    post,
    path = "/calendar-exceptions",
    request_body = CalendarExceptionInput,
    responses(
        (status = 201, description = "Calendar exception created", body = calendar_exception::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Calendar exceptions"
)]
pub async fn create_calendar_exception(
    State(state): State<AppState>,
    Json(input): Json<CalendarExceptionInput>,
) -> Result<(StatusCode, Json<calendar_exception::Model>), ApiError> {
    let created = CalendarExceptionService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific calendar exception by ID
#[utoipa::path(
    get,
    path = "/calendar-exceptions/{id}",
    params(("id" = Uuid, Path, description = "Calendar exception ID")),
    responses(
        (status = 200, description = "Calendar exception found", body = calendar_exception::Model),
        (status = 404, description = "Calendar exception not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Calendar exceptions"
)]
pub async fn get_calendar_exception(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<calendar_exception::Model>, ApiError> {
    found(CalendarExceptionService::get(&state.db, id).await?, "Calendar exception")
}

/// Replace a calendar exception
#[utoipa::path(
    put,
    path = "/calendar-exceptions/{id}",
    params(("id" = Uuid, Path, description = "Calendar exception ID")),
    request_body = CalendarExceptionInput,
    responses(
        (status = 200, description = "Calendar exception updated", body = calendar_exception::Model),
        (status = 404, description = "Calendar exception not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Calendar exceptions"
)]
pub async fn update_calendar_exception(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CalendarExceptionInput>,
) -> Result<Json<calendar_exception::Model>, ApiError> {
    found(CalendarExceptionService::update(&state.db, id, input).await?, "Calendar exception")
}

/// Delete a calendar exception
#[utoipa::path(
    delete,
    path = "/calendar-exceptions/{id}",
    params(("id" = Uuid, Path, description = "Calendar exception ID")),
    responses(
        (status = 204, description = "Calendar exception deleted"),
        (status = 404, description = "Calendar exception not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Calendar exceptions"
)]
pub async fn delete_calendar_exception(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(CalendarExceptionService::delete(&state.db, id).await?, "Calendar exception")
}
