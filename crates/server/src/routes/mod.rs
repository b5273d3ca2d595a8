use crate::{error::ApiError, state::AppState};
use axum::{Json, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;

pub mod attendance;
pub mod auth;
pub mod backup;
pub mod calendar_exception;
pub mod health;
pub mod lecture_slot;
pub mod program;
pub mod root;
pub mod section;
pub mod semester;
pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod timetable;

/// Every route that sits behind the bearer token layer when authentication
/// is enabled
pub fn api() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(root::router())
        .merge(auth::router())
        .merge(semester::router())
        .merge(program::router())
        .merge(section::router())
        .merge(subject::router())
        .merge(teacher::router())
        .merge(student::router())
        .merge(lecture_slot::router())
        .merge(timetable::router())
        .merge(session::router())
        .merge(attendance::router())
        .merge(calendar_exception::router())
        .merge(backup::router())
}

fn require<T>(model: Option<T>, what: &'static str) -> Result<T, ApiError> {
    model.ok_or(ApiError::NotFound(what))
}

fn found<T>(model: Option<T>, what: &'static str) -> Result<Json<T>, ApiError> {
    require(model, what).map(Json)
}

fn deleted(deleted: bool, what: &'static str) -> Result<StatusCode, ApiError> {
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(what))
    }
}
