use super::{deleted, found, require};
use crate::{
    dtos::{ErrorResponse, StatusUpdate},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::{attendance, session},
    services::session::{SessionInput, SessionService},
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_sessions, create_session))
        .routes(routes!(get_session, update_session, delete_session))
        .routes(routes!(set_session_status))
        .routes(routes!(session_attendance))
}

/// List all sessions
#[utoipa::path(
    get,
    path = "/sessions",
    responses(
        (status = 200, description = "All sessions, by date", body = Vec<session::Model>)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<session::Model>>, ApiError> {
    Ok(Json(SessionService::list(&state.db).await?))
}

/// Create a session
#[utoipa::path(
    post,
    path = "/sessions",
    request_body = SessionInput,
    responses(
        (status = 201, description = "Session created", body = session::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(input): Json<SessionInput>,
) -> Result<(StatusCode, Json<session::Model>), ApiError> {
    let created = SessionService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific session by ID
#[utoipa::path(
    get,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session found", body = session::Model),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<session::Model>, ApiError> {
    found(SessionService::get(&state.db, id).await?, "Session")
}

/// Replace a session
#[utoipa::path(
    put,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = SessionInput,
    responses(
        (status = 200, description = "Session updated", body = session::Model),
        (status = 404, description = "Session not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SessionInput>,
) -> Result<Json<session::Model>, ApiError> {
    found(SessionService::update(&state.db, id, input).await?, "Session")
}

/// Delete a session
#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(SessionService::delete(&state.db, id).await?, "Session")
}

/// Record that a session was held or cancelled
#[utoipa::path(
    put,
    path = "/sessions/{id}/status",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = session::Model),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn set_session_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<session::Model>, ApiError> {
    found(
        SessionService::set_status(&state.db, id, update.status).await?,
        "Session",
    )
}

/// Attendance marks taken in a session
#[utoipa::path(
    get,
    path = "/sessions/{id}/attendance",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Attendance marks of the session", body = Vec<attendance::Model>),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Sessions"
)]
pub async fn session_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<attendance::Model>>, ApiError> {
    require(SessionService::get(&state.db, id).await?, "Session")?;

    Ok(Json(SessionService::attendance(&state.db, id).await?))
}
