//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use budyy_core::db::Database;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;
    let count = db.count_answer_records()?;
    println!("   Answer records: {}", count);

    println!("   {}", super::encryption_status(&db));

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Import answers: budyy answers import --file answers.json --user <id>");
    println!("  2. View a profile: budyy profile <id>");
    println!("  3. Start the API: budyy serve");

    Ok(())
}
