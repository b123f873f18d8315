//! Integration tests for budyy-core
//!
//! These tests exercise the full import → store → profile workflow.

use budyy_core::{
    db::Database,
    load_money_profile,
    models::AnswerRecord,
    profile::{build_money_profile, Stability},
    InMemoryAnswerStore,
};

/// A questionnaire row as exported by the mobile app
fn exported_row() -> &'static str {
    r#"{
        "user_id": "5f0c",
        "q1_purpose": ["stop_running_out", "build_savings"],
        "q2_feel_money": "1_very_stressed",
        "q3_profile": "intl_student",
        "q4_income_range": "1000_1800",
        "q5_rent": "£ 720",
        "q6_send_home": "yes_monthly",
        "q7_goals": ["visa_renewal", "emergency_fund"],
        "q8_top_goal": "visa_renewal",
        "q9_goal_timeline": "6_months",
        "q10_goal_amount": "£1,500",
        "q11_frictions": ["sending_home", "high_rent"],
        "q12_run_out": "sometimes",
        "q13_save_pattern": "no",
        "q14_help": ["daily_safe_spend"],
        "q15_tone": "gentle",
        "q16_depth": "simple"
    }"#
}

#[test]
fn test_full_import_workflow() {
    let db = Database::in_memory().expect("Failed to create database");

    let record: AnswerRecord =
        serde_json::from_str(exported_row()).expect("Failed to parse exported row");
    assert!(record.missing_required().is_empty());

    db.upsert_answer_record("5f0c", &record)
        .expect("Failed to store answers");

    let profile = load_money_profile(&db, "5f0c")
        .expect("Failed to load profile")
        .expect("Profile should exist");

    // Very stressed, but only sometimes runs out: the earlier rule wins
    assert_eq!(profile.stability, Stability::Okay);
    assert_eq!(profile.estimated_income, Some(1400.0));
    assert_eq!(profile.estimated_rent, Some(720.0));
    assert_eq!(
        profile.pressures,
        vec![
            "Sending money home",
            "High rent",
            "Rent is using 50%+ of income"
        ]
    );

    let goal = profile.main_goal.expect("Goal should resolve");
    assert_eq!(goal.label, "Visa renewal");
    assert_eq!(goal.amount, Some(1500.0));
    assert_eq!(goal.suggested_monthly, Some(250.0));
    assert_eq!(profile.tone.as_deref(), Some("gentle"));
}

#[test]
fn test_stores_agree() {
    let record: AnswerRecord = serde_json::from_str(exported_row()).unwrap();

    let db = Database::in_memory().unwrap();
    db.upsert_answer_record("u", &record).unwrap();

    let memory = InMemoryAnswerStore::new();
    memory.insert("u", record.clone()).unwrap();

    let from_db = load_money_profile(&db, "u").unwrap();
    let from_memory = load_money_profile(&memory, "u").unwrap();
    assert_eq!(from_db, from_memory);
    assert_eq!(from_db, build_money_profile(Some(&record)));
}

#[test]
fn test_profile_survives_answer_update() {
    let db = Database::in_memory().unwrap();
    let mut record: AnswerRecord = serde_json::from_str(exported_row()).unwrap();
    db.upsert_answer_record("u", &record).unwrap();

    record.run_out = Some("almost_every_month".into());
    db.upsert_answer_record("u", &record).unwrap();

    let profile = load_money_profile(&db, "u").unwrap().unwrap();
    assert_eq!(profile.stability, Stability::Stretched);
}
