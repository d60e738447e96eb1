//! # Domain Types
//!
//! Core domain types used throughout the contacts store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Contact      │   │   NewContact    │   │ UpdateContactRequest │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  id (store)     │   │  first_name     │   │  first_name?         │  │
//! │  │  first_name     │   │  last_name      │   │  last_name?          │  │
//! │  │  last_name      │   │  phone          │   │  phone?              │  │
//! │  │  phone          │   │  address        │   │  address?            │  │
//! │  │  address        │   │                 │   │                      │  │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────────┘  │
//! │                                                                         │
//! │  ContactField: fixed allow-list of writable columns                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is generated by the store on insert and never written by callers.
//! That is why [`NewContact`] has no id and [`ContactField`] has no `Id`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Contact
// =============================================================================

/// A persisted contact.
///
/// Values handed out by the repository are copies; mutating one does not
/// touch the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Contact {
    /// Store-generated identifier (UUID v4 string).
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    pub phone: String,

    pub address: String,
}

impl Contact {
    /// Returns the four writable fields, dropping the id.
    pub fn to_new(&self) -> NewContact {
        NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}

// =============================================================================
// New Contact
// =============================================================================

/// Input for creating a contact.
///
/// All four fields are required. Empty strings are allowed; the store only
/// rejects absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

impl NewContact {
    /// Creates a new contact input.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        NewContact {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: impl Into<String>) -> Contact {
        Contact {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            address: self.address,
        }
    }
}

// =============================================================================
// Contact Field
// =============================================================================

/// The writable columns of the contacts table.
///
/// This is the only source of column names for dynamically built
/// statements. Values are always bound, never spliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
    Address,
}

impl ContactField {
    /// All writable fields in statement order.
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Phone,
        ContactField::Address,
    ];

    /// Column name in the contacts table.
    #[inline]
    pub const fn column(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Phone => "phone",
            ContactField::Address => "address",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

// =============================================================================
// Update Contact Request
// =============================================================================

/// A sparse patch.
///
/// `Some(value)` means "set to value", `None` means "leave unchanged".
/// `Some("")` is a real update to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdateContactRequest {
    /// Returns the patch value for one field.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => self.first_name.as_deref(),
            ContactField::LastName => self.last_name.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Address => self.address.as_deref(),
        }
    }

    /// Present fields in the order first_name, last_name, phone, address.
    ///
    /// ## Example
    /// ```rust
    /// use contacts_core::{ContactField, UpdateContactRequest};
    ///
    /// let patch = UpdateContactRequest {
    ///     address: Some("2 Side St".to_string()),
    ///     first_name: Some("Ana".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(
    ///     patch.present_fields(),
    ///     vec![(ContactField::FirstName, "Ana"), (ContactField::Address, "2 Side St")]
    /// );
    /// ```
    pub fn present_fields(&self) -> Vec<(ContactField, &str)> {
        ContactField::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|value| (*field, value)))
            .collect()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Applies the patch to an in-memory contact.
    ///
    /// Mirrors what the store does on a successful update, so callers can
    /// compute the expected record without a re-fetch.
    pub fn apply_to(&self, contact: &mut Contact) {
        for (field, value) in self.present_fields() {
            let slot = match field {
                ContactField::FirstName => &mut contact.first_name,
                ContactField::LastName => &mut contact.last_name,
                ContactField::Phone => &mut contact.phone,
                ContactField::Address => &mut contact.address,
            };
            *slot = value.to_string();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Contact {
        NewContact::new("Ana", "Lee", "555-1000", "1 Main St").with_id("abc")
    }

    #[test]
    fn test_present_fields_follow_column_order() {
        let patch = UpdateContactRequest {
            address: Some("2 Side St".to_string()),
            phone: Some("555-2000".to_string()),
            last_name: None,
            first_name: Some("Ann".to_string()),
        };

        let columns: Vec<&str> = patch
            .present_fields()
            .into_iter()
            .map(|(field, _)| field.column())
            .collect();
        assert_eq!(columns, vec!["first_name", "phone", "address"]);
    }

    #[test]
    fn test_empty_patch() {
        assert!(UpdateContactRequest::default().is_empty());

        let patch = UpdateContactRequest {
            last_name: Some(String::new()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut contact = ana();
        let patch = UpdateContactRequest {
            phone: Some("555-2000".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut contact);

        assert_eq!(contact.phone, "555-2000");
        assert_eq!(contact.first_name, "Ana");
        assert_eq!(contact.last_name, "Lee");
        assert_eq!(contact.address, "1 Main St");
        assert_eq!(contact.id, "abc");
    }

    #[test]
    fn test_patch_deserializes_missing_as_absent() {
        let patch: UpdateContactRequest =
            serde_json::from_str(r#"{"first_name":"X","address":""}"#).unwrap();

        assert_eq!(patch.first_name.as_deref(), Some("X"));
        assert_eq!(patch.last_name, None);
        assert_eq!(patch.phone, None);
        assert_eq!(patch.address.as_deref(), Some(""));
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = UpdateContactRequest {
            phone: Some("555".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"phone":"555"}"#);
    }

    #[test]
    fn test_contact_field_names() {
        let columns: Vec<&str> = ContactField::ALL.iter().map(|f| f.column()).collect();
        assert_eq!(columns, ["first_name", "last_name", "phone", "address"]);
        assert_eq!(ContactField::Address.to_string(), "address");
    }
}
