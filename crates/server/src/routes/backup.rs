use crate::{dtos::ErrorResponse, error::ApiError, state::AppState, utils::caller::Caller};
use axum::{Json, extract::State};
use database::services::backup::{Backup, BackupService};
use log::info;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(backup))
}

/// Download a full JSON copy of every table
#[utoipa::path(
    post,
    path = "/backup",
    responses(
        (status = 200, description = "Backup of all records", body = Backup),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Administration"
)]
pub async fn backup(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Backup>, ApiError> {
    caller.require_admin(&state).await?;

    let backup = BackupService::snapshot(&state.db).await?;
    info!("Backup requested by {}", caller.name());

    Ok(Json(backup))
}
