//! # Error Types
//!
//! Validation errors raised before any store interaction.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError (this crate)                                          │
//! │  ├── NoFieldsToUpdate    ← Patch with zero present fields              │
//! │  ├── Required            ← Field-level checks (opt-in)                 │
//! │  └── TooLong                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError::Validation (contacts-db) ← Returned by the repository        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors mean the caller-supplied request is structurally invalid.
/// They are always detected before the store is touched and are always
/// recoverable by fixing the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An update patch carried no present fields.
    #[error("no fields to update")]
    NoFieldsToUpdate,

    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fields_message() {
        assert_eq!(
            ValidationError::NoFieldsToUpdate.to_string(),
            "no fields to update"
        );
    }

    #[test]
    fn test_field_error_messages() {
        let err = ValidationError::Required {
            field: "first_name".to_string(),
        };
        assert_eq!(err.to_string(), "first_name is required");

        let err = ValidationError::TooLong {
            field: "address".to_string(),
            max: 255,
        };
        assert_eq!(err.to_string(), "address must be at most 255 characters");
    }
}
