use models::validation::ValidationError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors returned by the service layer.
///
/// Storage-level constraint violations (uniqueness, foreign keys, delete
/// protection) are passed through untranslated as [`Error::Db`].
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before it reached the database
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations)
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl Error {
    /// Whether the database refused the write because of a uniqueness or
    /// foreign-key rule
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Db(err) => matches!(
                err.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
                    | Some(SqlErr::ForeignKeyConstraintViolation(_))
            ),
            Self::Validation(_) => false,
        }
    }
}
