//! Command definitions and dispatch.
//!
//! Every subcommand maps to exactly one `ContactRepository` call.

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

use contacts_core::validation::validate_new_contact;
use contacts_core::{NewContact, UpdateContactRequest};
use contacts_db::{ContactRepository, DbResult};

#[derive(Parser, Debug)]
#[command(
    name = "contacts",
    author,
    version,
    about = "Manage contacts stored in a local SQLite database"
)]
pub struct Cli {
    /// Database file (overrides CONTACTS_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of contacts
    List {
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        limit: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },

    /// Case-insensitive substring search over name, phone and address
    Search {
        /// Empty matches every contact
        #[arg(default_value = "")]
        term: String,
    },

    /// Create a contact and print its id
    Add(AddArgs),

    /// Change only the given fields of a contact
    Update {
        id: String,

        #[command(flatten)]
        patch: PatchArgs,
    },

    /// Delete a contact
    Delete { id: String },

    /// Show one contact
    Get { id: String },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    /// Reject blank or overlong fields before inserting
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct PatchArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

impl From<PatchArgs> for UpdateContactRequest {
    fn from(args: PatchArgs) -> Self {
        UpdateContactRequest {
            first_name: args.first_name,
            last_name: args.last_name,
            phone: args.phone,
            address: args.address,
        }
    }
}

/// Runs one command and returns the JSON to print.
pub async fn run(repo: &ContactRepository, command: Command) -> DbResult<Value> {
    match command {
        Command::List { limit, offset } => Ok(json!(repo.list(limit, offset).await?)),

        Command::Search { term } => Ok(json!(repo.search(&term).await?)),

        Command::Add(args) => {
            let contact = NewContact::new(args.first_name, args.last_name, args.phone, args.address);
            if args.strict {
                validate_new_contact(&contact)?;
            }
            let id = repo.create(&contact).await?;
            Ok(json!({ "id": id }))
        }

        Command::Update { id, patch } => {
            repo.update(&id, &patch.into()).await?;
            Ok(json!({ "id": id, "updated": true }))
        }

        Command::Delete { id } => {
            repo.delete(&id).await?;
            Ok(json!({ "id": id, "deleted": true }))
        }

        Command::Get { id } => Ok(json!(repo.get_by_id(&id).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_db::{Database, DbConfig};

    async fn repo() -> ContactRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().contacts()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("contacts").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_update_builds_sparse_patch() {
        let cli = parse(&["update", "abc", "--phone", "555-2000"]);

        let Command::Update { id, patch } = cli.command else {
            panic!("expected update");
        };
        let patch: UpdateContactRequest = patch.into();

        assert_eq!(id, "abc");
        assert_eq!(patch.phone.as_deref(), Some("555-2000"));
        assert_eq!(patch.first_name, None);
    }

    #[test]
    fn test_parse_list_defaults_and_db_flag() {
        let cli = parse(&["--db", "/tmp/x.db", "list"]);

        assert_eq!(cli.db.as_deref(), Some("/tmp/x.db"));
        assert!(matches!(cli.command, Command::List { limit: 20, offset: 0 }));
    }

    #[tokio::test]
    async fn test_add_get_update_delete() {
        let repo = repo().await;

        let added = run(
            &repo,
            parse(&[
                "add",
                "--first-name",
                "Ana",
                "--last-name",
                "Lee",
                "--phone",
                "555-1000",
                "--address",
                "1 Main St",
            ])
            .command,
        )
        .await
        .unwrap();
        let id = added["id"].as_str().unwrap().to_string();

        let fetched = run(&repo, parse(&["get", &id]).command).await.unwrap();
        assert_eq!(fetched["last_name"], "Lee");

        run(&repo, parse(&["update", &id, "--phone", "555-2000"]).command)
            .await
            .unwrap();
        let fetched = run(&repo, parse(&["get", &id]).command).await.unwrap();
        assert_eq!(fetched["phone"], "555-2000");
        assert_eq!(fetched["first_name"], "Ana");

        run(&repo, parse(&["delete", &id]).command).await.unwrap();
        let err = run(&repo, parse(&["get", &id]).command).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let repo = repo().await;

        let err = run(&repo, parse(&["update", "abc"]).command)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_strict_add_rejects_blank_fields() {
        let repo = repo().await;

        let command = parse(&[
            "add",
            "--first-name",
            "",
            "--last-name",
            "Lee",
            "--phone",
            "1",
            "--address",
            "x",
            "--strict",
        ])
        .command;
        let err = run(&repo, command).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
