use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure taxonomy shared by the repository, rule engine and command layer.
///
/// `Validation` is resolved at the input boundary; the other variants surface
/// verbatim as the command's failure message. Nothing is retried and nothing
/// is swallowed.
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("{0} {1} not found")]
    NotFound(&'static str, i32),

    #[error("access denied: {0}")]
    PermissionDenied(String),

    #[error("data integrity error: {0}")]
    IntegrityViolation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type CrmResult<T> = Result<T, CrmError>;

impl From<DbErr> for CrmError {
    /// Unique and foreign-key conflicts at the storage boundary become
    /// `IntegrityViolation`; every other driver failure is `Storage`.
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => CrmError::IntegrityViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => CrmError::IntegrityViolation(msg),
            _ => CrmError::Storage(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CrmError {
    /// Session-file reads and writes go through the same taxonomy.
    fn from(err: std::io::Error) -> Self {
        CrmError::Storage(err.to_string())
    }
}
