use super::{deleted, found};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::semester,
    services::semester::{SemesterInput, SemesterService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_semesters, create_semester))
        .routes(routes!(get_semester, update_semester, delete_semester))
}

/// List all semesters
#[utoipa::path(
    get,
    path = "/semesters",
    responses(
        (status = 200, description = "All semesters, in order", body = Vec<semester::Model>)
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn list_semesters(
    State(state): State<AppState>,
) -> Result<Json<Vec<semester::Model>>, ApiError> {
    Ok(Json(SemesterService::list(&state.db).await?))
}

/// Create a semester
#[utoipa::path(
    post,
    path = "/semesters",
    request_body = SemesterInput,
    responses(
        (status = 201, description = "Semester created", body = semester::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn create_semester(
    State(state): State<AppState>,
    Json(input): Json<SemesterInput>,
) -> Result<(StatusCode, Json<semester::Model>), ApiError> {
    let created = SemesterService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific semester by ID
#[utoipa::path(
    get,
    path = "/semesters/{id}",
    params(("id" = Uuid, Path, description = "Semester ID")),
    responses(
        (status = 200, description = "Semester found", body = semester::Model),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn get_semester(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<semester::Model>, ApiError> {
    found(SemesterService::get(&state.db, id).await?, "Semester")
}

/// Replace a semester
#[utoipa::path(
    put,
    path = "/semesters/{id}",
    params(("id" = Uuid, Path, description = "Semester ID")),
    request_body = SemesterInput,
    responses(
        (status = 200, description = "Semester updated", body = semester::Model),
        (status = 404, description = "Semester not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn update_semester(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SemesterInput>,
) -> Result<Json<semester::Model>, ApiError> {
    found(SemesterService::update(&state.db, id, input).await?, "Semester")
}

/// Delete a semester
#[utoipa::path(
    delete,
    path = "/semesters/{id}",
    params(("id" = Uuid, Path, description = "Semester ID")),
    responses(
        (status = 204, description = "Semester deleted"),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn delete_semester(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(SemesterService::delete(&state.db, id).await?, "Semester")
}
