//! # contacts-core: Pure Domain Types for the Contacts Store
//!
//! This crate holds the contact record, the sparse update patch and the
//! validation rules around them. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Contacts Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`contacts`)                        │   │
//! │  │    list, search, add, update, delete, get                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ contacts-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │  search   │  │ validation│                  │   │
//! │  │   │  Contact  │  │  pattern  │  │   rules   │                  │   │
//! │  │   │  Patch    │  │  escaping │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  contacts-db (Database Layer)                   │   │
//! │  │    SQLite • Migrations • ContactRepository                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`types`] - `Contact`, `NewContact`, `UpdateContactRequest`, `ContactField`
//! - [`search`] - Substring pattern building for case-insensitive search
//! - [`validation`] - Patch and field validation
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use contacts_core::{ContactField, UpdateContactRequest};
//!
//! let patch = UpdateContactRequest {
//!     phone: Some("555-2000".to_string()),
//!     ..Default::default()
//! };
//!
//! let fields = patch.present_fields();
//! assert_eq!(fields, vec![(ContactField::Phone, "555-2000")]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length accepted by [`validation::validate_field`].
///
/// The store itself enforces no length; this bound only applies when a
/// caller opts into field validation before calling the repository.
pub const MAX_FIELD_LENGTH: usize = 255;
