//! Database status command

use std::path::Path;

use anyhow::Result;
use budyy_core::db::{Database, DB_KEY_ENV};

use super::open_db;

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!();
    println!("📊 Budyy Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = std::fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    let has_key = std::env::var(DB_KEY_ENV).is_ok();

    if !db_path.exists() {
        if no_encrypt {
            println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
        } else if !has_key {
            println!("   ❌ Encryption: REQUIRED but {} not set", DB_KEY_ENV);
        }
        println!();
        return Ok(());
    }

    match open_db(db_path, no_encrypt) {
        Ok(db) => {
            println!("   {}", encryption_status(&db));
            if let Ok(count) = db.count_answer_records() {
                println!();
                println!("   Answer records: {}", count);
            }
        }
        Err(e) => {
            println!();
            println!("   ❌ Error opening database: {}", e);
            if !no_encrypt && !has_key {
                println!("      Set {} or use --no-encrypt", DB_KEY_ENV);
            } else if has_key {
                println!("      (Check if {} is correct)", DB_KEY_ENV);
            }
        }
    }

    println!();
    Ok(())
}

/// Encryption line for an opened database, from how its pool was keyed
pub fn encryption_status(db: &Database) -> String {
    if db.is_encrypted() {
        format!("🔒 Encryption: ENABLED ({}=***)", DB_KEY_ENV)
    } else {
        "⚠️  Encryption: DISABLED (--no-encrypt)".to_string()
    }
}
