//! # Validation Module
//!
//! Input validation for contact requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (CLI / service)                                       │
//! │  └── Optional field checks: validate_new_contact                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ContactRepository                                            │
//! │  └── validate_patch: rejects an empty patch before any SQL             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY uniqueness                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository itself only enforces Layer 2. Empty strings are valid
//! contact values as far as the store is concerned.

use crate::error::ValidationError;
use crate::types::{ContactField, NewContact, UpdateContactRequest};
use crate::MAX_FIELD_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a patch has at least one present field.
///
/// ## Returns
/// The present `(field, value)` pairs in statement order, ready to bind.
///
/// ## Example
/// ```rust
/// use contacts_core::validation::validate_patch;
/// use contacts_core::{UpdateContactRequest, ValidationError};
///
/// let err = validate_patch(&UpdateContactRequest::default()).unwrap_err();
/// assert_eq!(err, ValidationError::NoFieldsToUpdate);
/// ```
pub fn validate_patch(patch: &UpdateContactRequest) -> ValidationResult<Vec<(ContactField, &str)>> {
    let fields = patch.present_fields();

    if fields.is_empty() {
        return Err(ValidationError::NoFieldsToUpdate);
    }

    Ok(fields)
}

/// Validates a single field value.
///
/// ## Rules
/// - Must not be blank (after trimming)
/// - Must be at most [`MAX_FIELD_LENGTH`] characters
pub fn validate_field(field: ContactField, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.column().to_string(),
        });
    }

    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.column().to_string(),
            max: MAX_FIELD_LENGTH,
        });
    }

    Ok(())
}

/// Validates every field of a new contact.
///
/// Stricter than the store: intended for interactive callers that want to
/// reject blank names before inserting.
pub fn validate_new_contact(contact: &NewContact) -> ValidationResult<()> {
    validate_field(ContactField::FirstName, &contact.first_name)?;
    validate_field(ContactField::LastName, &contact.last_name)?;
    validate_field(ContactField::Phone, &contact.phone)?;
    validate_field(ContactField::Address, &contact.address)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_patch_rejects_empty() {
        assert_eq!(
            validate_patch(&UpdateContactRequest::default()),
            Err(ValidationError::NoFieldsToUpdate)
        );
    }

    #[test]
    fn test_validate_patch_returns_present_fields() {
        let patch = UpdateContactRequest {
            last_name: Some("Kim".to_string()),
            address: Some(String::new()),
            ..Default::default()
        };

        let fields = validate_patch(&patch).unwrap();
        assert_eq!(
            fields,
            vec![(ContactField::LastName, "Kim"), (ContactField::Address, "")]
        );
    }

    #[test]
    fn test_validate_field() {
        assert!(validate_field(ContactField::Phone, "555-1000").is_ok());
        assert!(validate_field(ContactField::Phone, "").is_err());
        assert!(validate_field(ContactField::Phone, "   ").is_err());
        assert!(validate_field(ContactField::Address, &"A".repeat(MAX_FIELD_LENGTH)).is_ok());
        assert!(validate_field(ContactField::Address, &"A".repeat(MAX_FIELD_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_new_contact() {
        let ok = NewContact::new("Ana", "Lee", "555-1000", "1 Main St");
        assert!(validate_new_contact(&ok).is_ok());

        let blank_last = NewContact::new("Ana", "", "555-1000", "1 Main St");
        assert_eq!(
            validate_new_contact(&blank_last),
            Err(ValidationError::Required {
                field: "last_name".to_string()
            })
        );
    }
}
