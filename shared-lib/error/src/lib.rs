//! Common error types for the seeder workspace.
//!
//! Database failures are tagged by the step that produced them; the
//! Display text carries the underlying client error verbatim.

use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Database-related errors, one variant per failure step.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Create table error: {0}")]
    SchemaFailed(String),

    #[error("Insert error: {0}")]
    InsertFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        let err = DatabaseError::ConnectionFailed("server down".to_string());
        assert!(err.to_string().contains("Connection failed"));

        let err = DatabaseError::SchemaFailed("syntax".to_string());
        assert_eq!(err.to_string(), "Create table error: syntax");

        let err = DatabaseError::InsertFailed("duplicate".to_string());
        assert_eq!(err.to_string(), "Insert error: duplicate");
    }

    #[test]
    fn app_error_wraps_database_error() {
        let err: AppError = DatabaseError::ConnectionFailed("refused".to_string()).into();
        assert!(err.to_string().contains("Connection failed: refused"));
    }
}
