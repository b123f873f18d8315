//! CLI command tests

use std::io::Write;

use budyy_core::db::Database;
use budyy_core::models::AnswerRecord;
use tempfile::NamedTempFile;

use crate::commands::{self, encryption_status, format_pounds, parse_api_keys, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn write_answers(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const COMPLETE_ANSWERS: &str = r#"{
    "user_id": "from-file",
    "q1_purpose": ["build_savings"],
    "q2_feel_money": "4_confident",
    "q3_profile": "working_professional",
    "q4_income_range": "1800_2500",
    "q5_rent": "£900",
    "q8_top_goal": "emergency_fund",
    "q9_goal_timeline": "12_months",
    "q10_goal_amount": "3000",
    "q12_run_out": "never",
    "q13_save_pattern": "yes_fixed"
}"#;

const PARTIAL_ANSWERS: &str = r#"{
    "feeling": "2_stressed",
    "run_out": "often"
}"#;

// ========== Helper Tests ==========

#[test]
fn test_format_pounds() {
    assert_eq!(format_pounds(0.0), "£0");
    assert_eq!(format_pounds(250.0), "£250");
    assert_eq!(format_pounds(1400.0), "£1,400");
    assert_eq!(format_pounds(1234567.0), "£1,234,567");
    assert_eq!(format_pounds(-1500.0), "-£1,500");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a-very-long-user-id", 10), "a-very-...");
}

#[test]
fn test_parse_api_keys() {
    assert_eq!(parse_api_keys("one, two,,three "), vec!["one", "two", "three"]);
    assert!(parse_api_keys("").is_empty());
}

// ========== Answers Command Tests ==========

#[test]
fn test_cmd_answers_list_empty() {
    let db = setup_test_db();
    assert!(commands::cmd_answers_list(&db).is_ok());
}

#[test]
fn test_cmd_answers_import_uses_embedded_user() {
    let db = setup_test_db();
    let file = write_answers(COMPLETE_ANSWERS);

    let result = commands::cmd_answers_import(&db, file.path(), None, false);
    assert!(result.is_ok());

    let record = db.get_answer_record("from-file").unwrap().unwrap();
    assert_eq!(record.rent_text.as_deref(), Some("£900"));
    assert!(commands::cmd_answers_list(&db).is_ok());
    assert!(commands::cmd_answers_show(&db, "from-file").is_ok());
}

#[test]
fn test_cmd_answers_import_user_flag_wins() {
    let db = setup_test_db();
    let file = write_answers(COMPLETE_ANSWERS);

    commands::cmd_answers_import(&db, file.path(), Some("override"), false).unwrap();

    assert!(db.get_answer_record("override").unwrap().is_some());
    assert!(db.get_answer_record("from-file").unwrap().is_none());
}

#[test]
fn test_cmd_answers_import_requires_user() {
    let db = setup_test_db();
    let file = write_answers(PARTIAL_ANSWERS);

    let result = commands::cmd_answers_import(&db, file.path(), None, true);
    assert!(result.is_err());
    assert_eq!(db.count_answer_records().unwrap(), 0);
}

#[test]
fn test_cmd_answers_import_rejects_incomplete() {
    let db = setup_test_db();
    let file = write_answers(PARTIAL_ANSWERS);

    let result = commands::cmd_answers_import(&db, file.path(), Some("u"), false);
    assert!(result.is_err());
    assert!(db.get_answer_record("u").unwrap().is_none());
}

#[test]
fn test_cmd_answers_import_partial() {
    let db = setup_test_db();
    let file = write_answers(PARTIAL_ANSWERS);

    commands::cmd_answers_import(&db, file.path(), Some("u"), true).unwrap();

    let record = db.get_answer_record("u").unwrap().unwrap();
    assert!(!record.missing_required().is_empty());

    let audit = db.list_audit_log(10).unwrap();
    assert_eq!(audit[0].actor, "cli");
    assert_eq!(audit[0].action, "import");
}

#[test]
fn test_cmd_answers_import_invalid_json() {
    let db = setup_test_db();
    let file = write_answers("not json");
    assert!(commands::cmd_answers_import(&db, file.path(), Some("u"), true).is_err());
}

#[test]
fn test_cmd_answers_show_missing() {
    let db = setup_test_db();
    assert!(commands::cmd_answers_show(&db, "nobody").is_err());
}

#[test]
fn test_cmd_answers_delete() {
    let db = setup_test_db();
    db.upsert_answer_record("u", &AnswerRecord::default()).unwrap();

    assert!(commands::cmd_answers_delete(&db, "u").is_ok());
    assert!(db.get_answer_record("u").unwrap().is_none());
    assert!(commands::cmd_answers_delete(&db, "u").is_err());
}

// ========== Profile Command Tests ==========

#[test]
fn test_cmd_profile() {
    let db = setup_test_db();
    let file = write_answers(COMPLETE_ANSWERS);
    commands::cmd_answers_import(&db, file.path(), None, false).unwrap();

    assert!(commands::cmd_profile(&db, "from-file", false).is_ok());
    assert!(commands::cmd_profile(&db, "from-file", true).is_ok());
}

#[test]
fn test_cmd_profile_without_answers() {
    let db = setup_test_db();
    assert!(commands::cmd_profile(&db, "newcomer", false).is_ok());
    assert!(commands::cmd_profile(&db, "newcomer", true).is_ok());

    let audit = db.list_audit_log(10).unwrap();
    assert_eq!(audit.len(), 2);
    assert_eq!(audit[0].entity_id.as_deref(), Some("newcomer"));
}

#[test]
fn test_cmd_preview() {
    let file = write_answers(PARTIAL_ANSWERS);
    assert!(commands::cmd_preview(file.path(), false).is_ok());
    assert!(commands::cmd_preview(file.path(), true).is_ok());
}

#[test]
fn test_cmd_preview_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert!(commands::cmd_preview(&path, false).is_err());
}

// ========== Database Command Tests ==========

#[test]
fn test_cmd_init_and_status_unencrypted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budyy.db");

    assert!(commands::cmd_init(&path, true).is_ok());
    assert!(path.exists());
    assert!(commands::cmd_status(&path, true).is_ok());
}

#[test]
fn test_cmd_status_uninitialized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");
    assert!(commands::cmd_status(&path, true).is_ok());
    assert!(!path.exists());
}

#[test]
fn test_encryption_status_reflects_opened_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keyed.db");

    let keyed = Database::new_with_key(path.to_str().unwrap(), Some("passphrase")).unwrap();
    assert!(encryption_status(&keyed).contains("ENABLED"));

    let plain = setup_test_db();
    assert!(encryption_status(&plain).contains("DISABLED"));
}
