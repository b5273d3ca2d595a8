use super::{deleted, found, require};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::{program, section},
    services::program::{ProgramInput, ProgramService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_programs, create_program))
        .routes(routes!(get_program, update_program, delete_program))
        .routes(routes!(program_sections))
}

/// List all programs
#[utoipa::path(
    get,
    path = "/programs",
    responses(
        (status = 200, description = "All programs, by name", body = Vec<program::Model>)
    ),
    security(("jwt" = [])),
    tag = "Programs"
)]
pub async fn list_programs(
    State(state): State<AppState>,
) -> Result<Json<Vec<program::Model>>, ApiError> {
    Ok(Json(ProgramService::list(&state.db).await?))
}

/// Create a program
#[utoipa::path(
    post,
    path = "/programs",
    request_body = ProgramInput,
    responses(
        (status = 201, description = "Program created", body = program::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Programs"
)]
pub async fn create_program(
    State(state): State<AppState>,
    Json(input): Json<ProgramInput>,
) -> Result<(StatusCode, Json<program::Model>), ApiError> {
    let created = ProgramService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific program by ID
#[utoipa::path(
    get,
    path = "/programs/{id}",
    params(("id" = Uuid, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Program found", body = program::Model),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Programs"
)]
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<program::Model>, ApiError> {
    found(ProgramService::get(&state.db, id).await?, "Program")
}

/// Replace a program
#[utoipa::path(
    put,
    path = "/programs/{id}",
    params(("id" = Uuid, Path, description = "Program ID")),
    request_body = ProgramInput,
    responses(
        (status = 200, description = "Program updated", body = program::Model),
        (status = 404, description = "Program not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Programs"
)]
pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProgramInput>,
) -> Result<Json<program::Model>, ApiError> {
    found(ProgramService::update(&state.db, id, input).await?, "Program")
}

/// Delete a program
#[utoipa::path(
    delete,
    path = "/programs/{id}",
    params(("id" = Uuid, Path, description = "Program ID")),
    responses(
        (status = 204, description = "Program deleted"),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Programs"
)]
pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(ProgramService::delete(&state.db, id).await?, "Program")
}

/// Sections of a program, by year then name
#[utoipa::path(
    get,
    path = "/programs/{id}/sections",
    params(("id" = Uuid, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Sections of the program", body = Vec<section::Model>),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Programs"
)]
pub async fn program_sections(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<section::Model>>, ApiError> {
    require(ProgramService::get(&state.db, id).await?, "Program")?;

    Ok(Json(ProgramService::sections(&state.db, id).await?))
}
