//! Answer record database operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{
    check_user_id, AnswerRecord, AnswerRecordSummary, Feeling, GoalKey, GoalTimeline, IncomeRange, RunOut,
    SavePattern, SendsMoneyHome,
};
use crate::store::AnswerStore;

/// Raw column values, converted outside the row callback so JSON errors propagate
struct AnswerRow {
    purposes: String,
    profile: Option<String>,
    feeling: Option<String>,
    income_range: Option<String>,
    rent_text: Option<String>,
    sends_money_home: Option<String>,
    goals: String,
    top_goal: Option<String>,
    goal_timeline: Option<String>,
    goal_amount_text: Option<String>,
    frictions: String,
    run_out: Option<String>,
    save_pattern: Option<String>,
    help: String,
    tone: Option<String>,
    detail_level: Option<String>,
}

impl AnswerRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            purposes: row.get(0)?,
            profile: row.get(1)?,
            feeling: row.get(2)?,
            income_range: row.get(3)?,
            rent_text: row.get(4)?,
            sends_money_home: row.get(5)?,
            goals: row.get(6)?,
            top_goal: row.get(7)?,
            goal_timeline: row.get(8)?,
            goal_amount_text: row.get(9)?,
            frictions: row.get(10)?,
            run_out: row.get(11)?,
            save_pattern: row.get(12)?,
            help: row.get(13)?,
            tone: row.get(14)?,
            detail_level: row.get(15)?,
        })
    }

    fn into_record(self) -> Result<AnswerRecord> {
        Ok(AnswerRecord {
            purposes: serde_json::from_str(&self.purposes)?,
            feeling: self.feeling.map(Feeling::from),
            profile: self.profile,
            income_range: self.income_range.map(IncomeRange::from),
            rent_text: self.rent_text,
            sends_money_home: self.sends_money_home.map(SendsMoneyHome::from),
            goals: serde_json::from_str(&self.goals)?,
            top_goal: self.top_goal.map(GoalKey::from),
            goal_timeline: self.goal_timeline.map(GoalTimeline::from),
            goal_amount_text: self.goal_amount_text,
            frictions: serde_json::from_str(&self.frictions)?,
            run_out: self.run_out.map(RunOut::from),
            save_pattern: self.save_pattern.map(SavePattern::from),
            help: serde_json::from_str(&self.help)?,
            tone: self.tone,
            detail_level: self.detail_level,
        })
    }
}

impl Database {
    /// Insert or replace a user's answers
    ///
    /// Re-submitting the questionnaire overwrites every answer and refreshes
    /// `updated_at`; `created_at` keeps the first submission time.
    pub fn upsert_answer_record(&self, user_id: &str, record: &AnswerRecord) -> Result<()> {
        check_user_id(user_id)?;
        let conn = self.conn()?;

        let purposes = serde_json::to_string(&record.purposes)?;
        let goals = serde_json::to_string(&record.goals)?;
        let frictions = serde_json::to_string(&record.frictions)?;
        let help = serde_json::to_string(&record.help)?;

        conn.execute(
            r#"
            INSERT INTO answer_records (
                user_id, purposes, profile, feeling, income_range, rent_text,
                sends_money_home, goals, top_goal, goal_timeline, goal_amount_text,
                frictions, run_out, save_pattern, help, tone, detail_level
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                purposes = excluded.purposes,
                profile = excluded.profile,
                feeling = excluded.feeling,
                income_range = excluded.income_range,
                rent_text = excluded.rent_text,
                sends_money_home = excluded.sends_money_home,
                goals = excluded.goals,
                top_goal = excluded.top_goal,
                goal_timeline = excluded.goal_timeline,
                goal_amount_text = excluded.goal_amount_text,
                frictions = excluded.frictions,
                run_out = excluded.run_out,
                save_pattern = excluded.save_pattern,
                help = excluded.help,
                tone = excluded.tone,
                detail_level = excluded.detail_level,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![
                user_id,
                purposes,
                record.profile,
                record.feeling.as_ref().map(|c| c.as_str()),
                record.income_range.as_ref().map(|c| c.as_str()),
                record.rent_text,
                record.sends_money_home.as_ref().map(|c| c.as_str()),
                goals,
                record.top_goal.as_ref().map(|c| c.as_str()),
                record.goal_timeline.as_ref().map(|c| c.as_str()),
                record.goal_amount_text,
                frictions,
                record.run_out.as_ref().map(|c| c.as_str()),
                record.save_pattern.as_ref().map(|c| c.as_str()),
                help,
                record.tone,
                record.detail_level,
            ],
        )?;

        info!(user_id, "Saved answer record");
        Ok(())
    }

    /// Get a user's answers, `None` if they have not completed the questionnaire
    pub fn get_answer_record(&self, user_id: &str) -> Result<Option<AnswerRecord>> {
        let conn = self.conn()?;

        let row = conn
            .query_row(
                r#"
                SELECT purposes, profile, feeling, income_range, rent_text,
                       sends_money_home, goals, top_goal, goal_timeline, goal_amount_text,
                       frictions, run_out, save_pattern, help, tone, detail_level
                FROM answer_records
                WHERE user_id = ?
                "#,
                params![user_id],
                AnswerRow::from_row,
            )
            .optional()?;

        debug!(user_id, found = row.is_some(), "Looked up answer record");
        row.map(AnswerRow::into_record).transpose()
    }

    /// List stored records, most recently updated first
    pub fn list_answer_records(&self) -> Result<Vec<AnswerRecordSummary>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT user_id, created_at, updated_at
            FROM answer_records
            ORDER BY updated_at DESC, user_id
            "#,
        )?;

        let summaries = stmt
            .query_map([], |row| {
                let created_at: String = row.get(1)?;
                let updated_at: String = row.get(2)?;
                Ok(AnswerRecordSummary {
                    user_id: row.get(0)?,
                    created_at: parse_datetime(&created_at),
                    updated_at: parse_datetime(&updated_at),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    /// Delete a user's answers, returning whether a record existed
    pub fn delete_answer_record(&self, user_id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM answer_records WHERE user_id = ?",
            params![user_id],
        )?;

        if deleted > 0 {
            info!(user_id, "Deleted answer record");
        }
        Ok(deleted > 0)
    }

    /// Number of users with stored answers
    pub fn count_answer_records(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM answer_records", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl AnswerStore for Database {
    fn get_answer_record(&self, user_id: &str) -> Result<Option<AnswerRecord>> {
        Database::get_answer_record(self, user_id)
    }
}
