use super::{deleted, found, require};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::{section, student, timetable},
    services::section::{SectionInput, SectionService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_sections, create_section))
        .routes(routes!(get_section, update_section, delete_section))
        .routes(routes!(section_students))
        .routes(routes!(section_timetables))
}

/// List all sections
#[utoipa::path(
    get,
    path = "/sections",
    responses(
        (status = 200, description = "All sections, by program, year and name", body = Vec<section::Model>)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<Vec<section::Model>>, ApiError> {
    Ok(Json(SectionService::list(&state.db).await?))
}

/// Create a section
#[utoipa::path(
    post,
    path = "/sections",
    request_body = SectionInput,
    responses(
        (status = 201, description = "Section created", body = section::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn create_section(
    State(state): State<AppState>,
    Json(input): Json<SectionInput>,
) -> Result<(StatusCode, Json<section::Model>), ApiError> {
    let created = SectionService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific section by ID
#[utoipa::path(
    get,
    path = "/sections/{id}",
    params(("id" = Uuid, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section found", body = section::Model),
        (status = 404, description = "Section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<section::Model>, ApiError> {
    found(SectionService::get(&state.db, id).await?, "Section")
}

/// Replace a section
#[utoipa::path(
    put,
    path = "/sections/{id}",
    params(("id" = Uuid, Path, description = "Section ID")),
    request_body = SectionInput,
    responses(
        (status = 200, description = "Section updated", body = section::Model),
        (status = 404, description = "Section not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SectionInput>,
) -> Result<Json<section::Model>, ApiError> {
    found(SectionService::update(&state.db, id, input).await?, "Section")
}

/// Delete a section
#[utoipa::path(
    delete,
    path = "/sections/{id}",
    params(("id" = Uuid, Path, description = "Section ID")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 404, description = "Section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(SectionService::delete(&state.db, id).await?, "Section")
}

/// Students in a section, by roll number
#[utoipa::path(
    get,
    path = "/sections/{id}/students",
    params(("id" = Uuid, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Students in the section", body = Vec<student::Model>),
        (status = 404, description = "Section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn section_students(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<student::Model>>, ApiError> {
    require(SectionService::get(&state.db, id).await?, "Section")?;

    Ok(Json(SectionService::students(&state.db, id).await?))
}

/// Weekly timetable of a section
#[utoipa::path(
    get,
    path = "/sections/{id}/timetables",
    params(("id" = Uuid, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Timetable entries of the section", body = Vec<timetable::Model>),
        (status = 404, description = "Section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn section_timetables(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<timetable::Model>>, ApiError> {
    require(SectionService::get(&state.db, id).await?, "Section")?;

    Ok(Json(SectionService::timetables(&state.db, id).await?))
}
