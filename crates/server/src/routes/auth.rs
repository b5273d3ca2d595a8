use crate::{dtos::ErrorResponse, error::ApiError, state::AppState, utils::caller::Caller};
use axum::{Json, extract::State};
use database::{entities::teacher, services::teacher::TeacherService};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(me))
}

/// Returns the teacher whose account matches the subject of the caller's JWT
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Teacher linked to the authenticated account", body = teacher::Model),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse),
        (status = 404, description = "No teacher is linked to this account", body = ErrorResponse)
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<teacher::Model>, ApiError> {
    let account_id = caller.subject()?;

    TeacherService::find_by_account(&state.db, account_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Teacher"))
}
