//! # contacts-db: Database Layer for the Contacts Store
//!
//! This crate provides database access for contacts.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Contacts Data Flow                               │
//! │                                                                         │
//! │  CLI command (contacts search lee)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    contacts-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐  ┌──────────────┐   │   │
//! │  │   │   Database    │    │   Repository    │  │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │  (contact.rs)   │  │  (embedded)  │   │   │
//! │  │   │               │    │                 │  │              │   │   │
//! │  │   │ SqlitePool    │◄───│ ContactRepo     │  │ 001_contacts │   │   │
//! │  │   └───────────────┘    └─────────────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (contacts table)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contacts_core::NewContact;
//! use contacts_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("contacts.db")).await?;
//!
//! let id = db.contacts().create(&NewContact::new("Ana", "Lee", "555-1000", "1 Main St")).await?;
//! let hits = db.contacts().search("lee").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::contact::ContactRepository;
