//! # Seed Data Generator
//!
//! Populates the database with test contacts for development.
//!
//! ## Usage
//! ```bash
//! # Generate 1,000 contacts (default)
//! cargo run -p contacts-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p contacts-db --bin seed -- --count 5000
//!
//! # Specify database path
//! cargo run -p contacts-db --bin seed -- --db ./data/contacts.db
//! ```
//!
//! Each contact combines a first name, last name and street from fixed
//! lists, with a phone number derived from its index.

use clap::Parser;
use contacts_core::NewContact;
use contacts_db::{Database, DbConfig};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Ben", "Chloe", "Dev", "Elena", "Farah", "Gus", "Hana", "Ivan", "June", "Kofi", "Lena",
    "Marco", "Nia", "Omar", "Priya", "Quinn", "Rosa", "Sam", "Tomas",
];

const LAST_NAMES: &[&str] = &[
    "Lee", "Smith", "Garcia", "Okafor", "Nguyen", "Schmidt", "Rossi", "Kowalski", "Haddad",
    "Tanaka", "Silva", "Murphy", "Novak", "Ivanova", "Mensah",
];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Pine Rd", "Maple Dr", "Cedar Ln", "Elm St", "Harbor Way", "Hill Rd",
];

/// Contacts Seed Data Generator
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct SeedArgs {
    /// Number of contacts to generate
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Database file path
    #[arg(short, long, default_value = "./contacts_dev.db")]
    db: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let SeedArgs { count, db: db_path } = SeedArgs::parse();

    println!("Contacts Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!("Contacts: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let contacts = db.contacts();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = contacts.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} contacts", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating contacts...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let contact = generate_contact(seed);

        if let Err(e) = contacts.create(&contact).await {
            eprintln!(
                "Failed to insert {} {}: {}",
                contact.first_name, contact.last_name, e
            );
            continue;
        }

        generated += 1;

        if generated % 250 == 0 {
            println!("  Generated {} contacts...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} contacts in {:?}", generated, elapsed);

    println!();
    println!("Verifying search...");
    let hits = contacts.search("lee").await?;
    println!("  Search 'lee': {} results", hits.len());
    let hits = contacts.search("MAIN").await?;
    println!("  Search 'MAIN': {} results", hits.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single contact from its index.
fn generate_contact(seed: usize) -> NewContact {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let street = STREETS[(seed * 7) % STREETS.len()];

    NewContact::new(
        first,
        last,
        format!("555-{:04}", seed % 10_000),
        format!("{} {}", 1 + (seed * 13) % 999, street),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = SeedArgs::try_parse_from(["seed"]).unwrap();
        assert_eq!(args.count, 1000);
        assert_eq!(args.db, "./contacts_dev.db");
    }

    #[test]
    fn test_bad_count_is_rejected() {
        assert!(SeedArgs::try_parse_from(["seed", "--count", "lots"]).is_err());
        assert!(SeedArgs::try_parse_from(["seed", "-c", "-5"]).is_err());

        let args = SeedArgs::try_parse_from(["seed", "-c", "25", "-d", "x.db"]).unwrap();
        assert_eq!(args.count, 25);
        assert_eq!(args.db, "x.db");
    }

    #[test]
    fn test_generate_contact_is_deterministic() {
        assert_eq!(generate_contact(0), generate_contact(0));
        assert_eq!(generate_contact(0).first_name, "Ana");
        assert_eq!(generate_contact(21).phone, "555-0021");
        assert_ne!(generate_contact(1), generate_contact(2));
    }
}
