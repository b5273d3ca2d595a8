use super::{deleted, found, require};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::{student, subject},
    services::subject::{SubjectInput, SubjectService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_subjects, create_subject))
        .routes(routes!(get_subject, update_subject, delete_subject))
        .routes(routes!(subject_students))
}

/// List all subjects
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "All subjects, by name", body = Vec<subject::Model>)
    ),
    security(("jwt" = [])),
    tag = "Subjects"
)]
pub async fn list_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<subject::Model>>, ApiError> {
    Ok(Json(SubjectService::list(&state.db).await?))
}

/// Create a subject
#[utoipa::path(
    post,
    path = "/subjects",
    request_body = SubjectInput,
    responses(
        (status = 201, description = "Subject created", body = subject::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Subjects"
)]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(input): Json<SubjectInput>,
) -> Result<(StatusCode, Json<subject::Model>), ApiError> {
    let created = SubjectService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific subject by ID
#[utoipa::path(
    get,
    path = "/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject found", body = subject::Model),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Subjects"
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<subject::Model>, ApiError> {
    found(SubjectService::get(&state.db, id).await?, "Subject")
}

/// Replace a subject
#[utoipa::path(
    put,
    path = "/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    request_body = SubjectInput,
    responses(
        (status = 200, description = "Subject updated", body = subject::Model),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Subjects"
)]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SubjectInput>,
) -> Result<Json<subject::Model>, ApiError> {
    found(SubjectService::update(&state.db, id, input).await?, "Subject")
}

/// Delete a subject
#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Subjects"
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(SubjectService::delete(&state.db, id).await?, "Subject")
}

/// Students enrolled in a subject
#[utoipa::path(
    get,
    path = "/subjects/{id}/students",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Enrolled students", body = Vec<student::Model>),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Subjects"
)]
pub async fn subject_students(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<student::Model>>, ApiError> {
    require(SubjectService::get(&state.db, id).await?, "Subject")?;

    Ok(Json(SubjectService::students(&state.db, id).await?))
}
