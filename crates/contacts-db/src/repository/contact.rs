//! # Contact Repository
//!
//! Database operations for contacts.
//!
//! ## Key Operations
//! - Paginated listing
//! - Case-insensitive substring search over four fields
//! - CRUD, with partial updates that touch only the supplied fields
//!
//! ## Partial Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Patch Becomes SQL                              │
//! │                                                                         │
//! │  Patch { first_name: None, last_name: None,                            │
//! │          phone: Some("555-2000"), address: Some("2 Side St") }         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  present fields, fixed order  →  [(phone, ..), (address, ..)]          │
//! │       │                                                                 │
//! │       ├── empty? → ValidationError, no SQL is built                    │
//! │       ▼                                                                 │
//! │  UPDATE contacts SET phone = ?, address = ? WHERE id = ?               │
//! │                      bind: "555-2000", "2 Side St", id                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rows_affected == 0 → NotFound                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column names only ever come from [`ContactField::column`]; values are
//! always bound.

use contacts_core::search::substring_pattern;
use contacts_core::validation::validate_patch;
use contacts_core::{Contact, ContactField, NewContact, UpdateContactRequest};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};

/// Entity name used in [`DbError::NotFound`].
const ENTITY: &str = "Contact";

/// Repository for contact database operations.
///
/// Stateless apart from the pool handle, so it is cheap to clone and safe
/// to share across tasks. Concurrency control is left to SQLite.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ContactRepository::new(pool);
///
/// let id = repo.create(&NewContact::new("Ana", "Lee", "555-1000", "1 Main St")).await?;
/// let contact = repo.get_by_id(&id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    /// Creates a new ContactRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ContactRepository { pool }
    }

    /// Lists one page of contacts.
    ///
    /// Rows come back in insertion order, so consecutive pages with the same
    /// `limit` never repeat a row while nothing is written in between.
    ///
    /// ## Arguments
    /// * `limit` - Maximum rows to return
    /// * `offset` - Rows to skip
    ///
    /// Negative values are handed to SQLite unchanged; a negative `LIMIT`
    /// there means "no limit".
    pub async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Contact>> {
        debug!(limit, offset, "Listing contacts");

        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, phone, address
            FROM contacts
            ORDER BY rowid
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| warn!(error = %e, "Listing contacts failed"))?;

        debug!(count = contacts.len(), "Listed contacts");
        Ok(contacts)
    }

    /// Searches contacts by case-insensitive substring.
    ///
    /// ## How It Works
    /// `term` is escaped into a `(?i)` regex and matched with `REGEXP`
    /// against first name, last name, phone and address. A row matches if
    /// any one of the four contains the term. Case folding is Unicode-aware.
    ///
    /// An empty term matches every row. Results are not paginated.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Contact>> {
        debug!(term = %term, "Searching contacts");

        let pattern = substring_pattern(term);

        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, phone, address
            FROM contacts
            WHERE first_name REGEXP ?1
               OR last_name REGEXP ?1
               OR phone REGEXP ?1
               OR address REGEXP ?1
            ORDER BY rowid
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| warn!(error = %e, "Searching contacts failed"))?;

        debug!(count = contacts.len(), "Search returned contacts");
        Ok(contacts)
    }

    /// Inserts a new contact.
    ///
    /// ## Returns
    /// * `Ok(String)` - The id the store generated for the new row
    /// * `Err(DbError)` - Constraint violation or connection failure
    pub async fn create(&self, contact: &NewContact) -> DbResult<String> {
        debug!(
            first_name = %contact.first_name,
            last_name = %contact.last_name,
            "Creating contact"
        );

        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO contacts (first_name, last_name, phone, address)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .bind(&contact.address)
        .fetch_one(&self.pool)
        .await
        .inspect_err(|e| warn!(error = %e, "Creating contact failed"))?;

        debug!(id = %id, "Contact created");
        Ok(id)
    }

    /// Applies a sparse patch to one contact.
    ///
    /// Only the fields present in `patch` are written; the others keep their
    /// stored values.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::Validation)` - Patch has no present fields (store untouched)
    /// * `Err(DbError::NotFound)` - No contact with this id
    pub async fn update(&self, id: &str, patch: &UpdateContactRequest) -> DbResult<()> {
        debug!(id = %id, "Updating contact");

        let fields = validate_patch(patch)?;
        let mut builder = update_statement(id, &fields);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .inspect_err(|e| warn!(id = %id, error = %e, "Updating contact failed"))?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "Update matched no contact");
            return Err(DbError::not_found(ENTITY, id));
        }

        debug!(id = %id, fields = fields.len(), "Contact updated");
        Ok(())
    }

    /// Deletes a contact.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No contact with this id
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting contact");

        let result = sqlx::query("DELETE FROM contacts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| warn!(id = %id, error = %e, "Deleting contact failed"))?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "Delete matched no contact");
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }

    /// Gets a contact by its id.
    ///
    /// ## Returns
    /// * `Ok(Contact)` - Contact found
    /// * `Err(DbError::NotFound)` - No contact with this id
    pub async fn get_by_id(&self, id: &str) -> DbResult<Contact> {
        debug!(id = %id, "Fetching contact");

        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, phone, address
            FROM contacts
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| warn!(id = %id, error = %e, "Fetching contact failed"))?;

        contact.ok_or_else(|| {
            warn!(id = %id, "Contact not found");
            DbError::not_found(ENTITY, id)
        })
    }

    /// Counts all contacts (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await
            .inspect_err(|e| warn!(error = %e, "Counting contacts failed"))?;

        Ok(count)
    }
}

/// Builds `UPDATE contacts SET <col> = ?, ... WHERE id = ?`.
///
/// `fields` must be non-empty; callers get it from `validate_patch`.
fn update_statement(id: &str, fields: &[(ContactField, &str)]) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new("UPDATE contacts SET ");

    let mut assignments = builder.separated(", ");
    for (field, value) in fields {
        assignments.push(field.column());
        assignments.push_unseparated(" = ");
        assignments.push_bind_unseparated(value.to_string());
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.to_string());
    builder
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> ContactRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().contacts()
    }

    #[test]
    fn test_update_statement_single_field() {
        let builder = update_statement("abc", &[(ContactField::FirstName, "X")]);
        assert_eq!(builder.sql(), "UPDATE contacts SET first_name = ? WHERE id = ?");
    }

    #[test]
    fn test_update_statement_all_fields_in_order() {
        let builder = update_statement(
            "abc",
            &[
                (ContactField::FirstName, "a"),
                (ContactField::LastName, "b"),
                (ContactField::Phone, "c"),
                (ContactField::Address, "d"),
            ],
        );
        assert_eq!(
            builder.sql(),
            "UPDATE contacts SET first_name = ?, last_name = ?, phone = ?, address = ? WHERE id = ?"
        );
    }

    #[tokio::test]
    async fn test_update_with_empty_patch_is_validation_error() {
        let repo = repo().await;
        let id = repo
            .create(&NewContact::new("Ana", "Lee", "555-1000", "1 Main St"))
            .await
            .unwrap();

        let err = repo
            .update(&id, &UpdateContactRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "no fields to update");
    }

    #[tokio::test]
    async fn test_empty_patch_is_rejected_even_for_unknown_id() {
        let repo = repo().await;

        let err = repo
            .update("missing", &UpdateContactRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = repo().await;
        repo.create(&NewContact::new("Ana", "Lee", "555-1000", "100% Main St"))
            .await
            .unwrap();
        repo.create(&NewContact::new("Bo", "Kim", "555-3000", "1000 Oak Ave"))
            .await
            .unwrap();

        let hits = repo.search("100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Ana");

        assert!(repo.search("_").await.unwrap().is_empty());
        assert!(repo.search(".").await.unwrap().is_empty());
        assert!(repo.search("(").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count() {
        let repo = repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(&NewContact::new("Ana", "Lee", "555-1000", "1 Main St"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
