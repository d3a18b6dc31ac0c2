//! Shared storage types for Postboard
//!
//! Common repository error used by every storage provider.

use crate::error::Error;
use thiserror::Error;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    #[error("Record was modified concurrently")]
    StaleVersion,

    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);

        if unique_violation {
            RepositoryError::AlreadyExists
        } else if matches!(err, sqlx::Error::RowNotFound) {
            RepositoryError::NotFound
        } else {
            RepositoryError::Connection(err)
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::StaleVersion => {
                Error::Conflict("Record was modified concurrently".to_string())
            }
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::InvalidData(msg) => Error::Internal(msg),
        }
    }
}
