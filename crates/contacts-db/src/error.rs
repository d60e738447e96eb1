//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (contacts-core) ─┐                                    │
//! │                                   │                                     │
//! │  SQLite Error (sqlx::Error) ──────┤                                    │
//! │                                   ▼                                     │
//! │  DbError (this module) ← One taxonomy for every repository call        │
//! │       │                                                                 │
//! │       ├── Validation        caller fixes input, store untouched        │
//! │       ├── NotFound          zero rows affected / returned              │
//! │       └── everything else   store error, propagated as-is              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (CLI) maps to exit status / message                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate retries or swallows an error.

use contacts_core::ValidationError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
///
/// Store-native values (`sqlx::Error`, SQLite result codes) never leak past
/// this type. "No match" signals from the store all become [`DbError::NotFound`].
#[derive(Debug, Error)]
pub enum DbError {
    /// Request rejected before touching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - `fetch_optional` returns no row
    /// - UPDATE / DELETE reports zero affected rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Primary key collision on insert
    /// - Any UNIQUE index violation
    #[error("Duplicate value for {field}")]
    UniqueViolation { field: String },

    /// NOT NULL or CHECK constraint violation.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error (decode failures, I/O, protocol).
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// True for [`DbError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }

    /// True for [`DbError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, DbError::Validation(_))
    }

    /// True for every failure that came from the store itself.
    pub fn is_store_error(&self) -> bool {
        !self.is_not_found() && !self.is_validation()
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Constraint kind, else QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                match db_err.kind() {
                    // SQLite: "UNIQUE constraint failed: <table>.<column>"
                    ErrorKind::UniqueViolation => DbError::UniqueViolation {
                        field: msg
                            .split("constraint failed: ")
                            .nth(1)
                            .unwrap_or("unknown")
                            .to_string(),
                    },
                    ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                        DbError::ConstraintViolation {
                            message: msg.to_string(),
                        }
                    }
                    _ => DbError::QueryFailed(msg.to_string()),
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(err.is_not_found());
        assert!(!err.is_store_error());
    }

    #[test]
    fn test_pool_errors_are_store_errors() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
        assert!(err.is_store_error());

        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[test]
    fn test_validation_passes_message_through() {
        let err: DbError = ValidationError::NoFieldsToUpdate.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "no fields to update");
    }

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Contact", "abc");
        assert_eq!(err.to_string(), "Contact not found: abc");
    }
}
