//! Error types for sg-db

use thiserror::Error;

/// Metadata store errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Version query error (D002)
    #[error("[D002] Failed to read migration info: {0}")]
    QueryError(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
