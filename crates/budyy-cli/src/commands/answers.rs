//! Answer record commands (list, show, import, delete)

use std::path::Path;

use anyhow::{bail, Context, Result};
use budyy_core::db::Database;
use budyy_core::models::AnswerRecord;
use tracing::debug;

/// Actor recorded in the audit log for CLI changes
pub const CLI_ACTOR: &str = "cli";

pub fn cmd_answers_list(db: &Database) -> Result<()> {
    let records = db.list_answer_records()?;

    if records.is_empty() {
        println!("No answer records stored. Import one with 'budyy answers import'.");
        return Ok(());
    }

    println!();
    println!("📋 Answer Records ({})", records.len());
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:<36}  {:<16}  {:<16}", "User", "Created", "Updated");
    for record in &records {
        println!(
            "   {:<36}  {:<16}  {:<16}",
            super::truncate(&record.user_id, 36),
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            record.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        );
    }
    println!();

    Ok(())
}

pub fn cmd_answers_show(db: &Database, user_id: &str) -> Result<()> {
    let record = db
        .get_answer_record(user_id)?
        .with_context(|| format!("No answers stored for user '{}'", user_id))?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Read an answer record file, returning the record and any `user_id` it names
pub fn read_answer_file(file: &Path) -> Result<(AnswerRecord, Option<String>)> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let embedded_user = value
        .get("user_id")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string);

    let record: AnswerRecord = serde_json::from_value(value)
        .with_context(|| format!("{} is not an answer record", file.display()))?;

    debug!(file = %file.display(), user = ?embedded_user, "Read answer file");
    Ok((record, embedded_user))
}

pub fn cmd_answers_import(
    db: &Database,
    file: &Path,
    user: Option<&str>,
    partial: bool,
) -> Result<()> {
    let (record, embedded_user) = read_answer_file(file)?;

    let user_id = match user.map(str::to_string).or(embedded_user) {
        Some(id) => id,
        None => bail!("No user id given. Pass --user or include \"user_id\" in the file"),
    };

    let missing = record.missing_required();
    if !missing.is_empty() {
        if !partial {
            println!("❌ Answers for '{}' are incomplete:", user_id);
            for answer in &missing {
                println!("   Step {}: {}", answer.step(), answer.prompt());
            }
            println!();
            println!("   Use --partial to store them anyway.");
            bail!("{} required answer(s) missing", missing.len());
        }
        println!(
            "⚠️  Storing partial answers ({} required missing)",
            missing.len()
        );
    }

    db.upsert_answer_record(&user_id, &record)
        .context("Failed to store answers")?;
    db.log_audit(
        CLI_ACTOR,
        "import",
        Some("answers"),
        Some(&user_id),
        Some(&format!("file={}", file.display())),
    )?;

    println!("✅ Stored answers for '{}'", user_id);
    println!("   View the profile: budyy profile {}", user_id);
    Ok(())
}

pub fn cmd_answers_delete(db: &Database, user_id: &str) -> Result<()> {
    if !db.delete_answer_record(user_id)? {
        bail!("No answers stored for user '{}'", user_id);
    }
    db.log_audit(CLI_ACTOR, "delete", Some("answers"), Some(user_id), None)?;

    println!("🗑️  Deleted answers for '{}'", user_id);
    Ok(())
}
