use crate::{config::ConfigError, dtos::ErrorResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors a handler can answer with
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Administrator access required")]
    Forbidden,
    #[error(transparent)]
    Service(#[from] database::Error),
}

/// Failures that stop the server from starting
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("Failed to set up token validation: {0}")]
    Auth(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Service(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Service(database::Error::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(e) if e.is_constraint_violation() => StatusCode::CONFLICT,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::validation::ValidationError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("Program").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(database::Error::Validation(ValidationError::EndNotAfterStart)).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(DbErr::Custom("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message() {
        let err: ApiError = database::Error::Validation(ValidationError::EndNotAfterStart).into();

        assert_eq!(err.to_string(), "End time must be after start time");
    }
}
