//! # Repository Module
//!
//! Database repository implementations for the contacts store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │                                                                 │
//! │       │  db.contacts().search("lee")                                   │
//! │       ▼                                                                 │
//! │  ContactRepository                                                     │
//! │  ├── list(&self, limit, offset)                                        │
//! │  ├── search(&self, term)                                               │
//! │  ├── create(&self, contact)                                            │
//! │  ├── update(&self, id, patch)                                          │
//! │  ├── delete(&self, id)                                                 │
//! │  └── get_by_id(&self, id)                                              │
//! │       │                                                                 │
//! │       │  One parameterized SQL statement per call                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ContactRepository`](contact::ContactRepository) - Contact CRUD and search

pub mod contact;
