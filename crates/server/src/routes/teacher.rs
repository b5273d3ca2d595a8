use super::{deleted, found};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState, utils::caller::Caller};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::teacher,
    services::teacher::{TeacherInput, TeacherService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_teachers, create_teacher))
        .routes(routes!(get_teacher, update_teacher, delete_teacher))
}

/// List all teachers
#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "All teachers, by last name", body = Vec<teacher::Model>)
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<teacher::Model>>, ApiError> {
    Ok(Json(TeacherService::list(&state.db).await?))
}

/// Create a teacher
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = TeacherInput,
    responses(
        (status = 201, description = "Teacher created", body = teacher::Model),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    caller: Caller,
    Json(input): Json<TeacherInput>,
) -> Result<(StatusCode, Json<teacher::Model>), ApiError> {
    caller.require_admin(&state).await?;
    let created = TeacherService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific teacher by ID
#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher found", body = teacher::Model),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<teacher::Model>, ApiError> {
    found(TeacherService::get(&state.db, id).await?, "Teacher")
}

/// Replace a teacher
#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = TeacherInput,
    responses(
        (status = 200, description = "Teacher updated", body = teacher::Model),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(input): Json<TeacherInput>,
) -> Result<Json<teacher::Model>, ApiError> {
    caller.require_admin(&state).await?;
    found(TeacherService::update(&state.db, id, input).await?, "Teacher")
}

/// Delete a teacher
#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    caller.require_admin(&state).await?;
    deleted(TeacherService::delete(&state.db, id).await?, "Teacher")
}
