use crate::{error::ApiError, state::AppState};
use axum::{extract::FromRequestParts, http::request::Parts};
use database::services::teacher::TeacherService;
use log::warn;
use std::convert::Infallible;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Subject of the validated bearer token, absent when the request was not
/// authenticated
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<String>);

impl Caller {
    pub fn subject(&self) -> Result<&str, ApiError> {
        self.0.as_deref().ok_or(ApiError::Unauthorized)
    }

    /// Passes only callers linked to an administrator teacher. Everyone passes
    /// when authentication is disabled.
    pub async fn require_admin(&self, state: &AppState) -> Result<(), ApiError> {
        if !state.auth_enabled {
            return Ok(());
        }

        let account_id = self.subject()?;
        let is_admin = TeacherService::find_by_account(&state.db, account_id)
            .await?
            .is_some_and(|teacher| teacher.is_admin);

        if !is_admin {
            warn!("Administrator access refused for {account_id}");
            return Err(ApiError::Forbidden);
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        self.0.as_deref().unwrap_or("anonymous")
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let sub = parts
            .extensions
            .get::<DefaultClaims>()
            .and_then(|claims| claims.sub.clone());

        Ok(Self(sub))
    }
}
