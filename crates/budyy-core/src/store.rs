//! Answer record lookup
//!
//! The profile engine only needs "give me this user's answers, if any".
//! [`AnswerStore`] is that contract; [`Database`](crate::db::Database) is the
//! persistent implementation and [`InMemoryAnswerStore`] serves embedding
//! and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{check_user_id, AnswerRecord};
use crate::profile::{build_money_profile, MoneyProfile};

/// Source of questionnaire answers keyed by user id
pub trait AnswerStore {
    /// The user's answers, `None` when they have not completed the questionnaire
    fn get_answer_record(&self, user_id: &str) -> Result<Option<AnswerRecord>>;
}

/// Fetch a user's answers and derive their money profile
///
/// `Ok(None)` means there is nothing to profile yet and the user should be
/// sent through onboarding.
pub fn load_money_profile<S>(store: &S, user_id: &str) -> Result<Option<MoneyProfile>>
where
    S: AnswerStore + ?Sized,
{
    let record = store.get_answer_record(user_id)?;
    let profile = build_money_profile(record.as_ref());

    match &profile {
        Some(p) => debug!(
            user_id,
            stability = %p.stability,
            pressures = p.pressures.len(),
            has_goal = p.main_goal.is_some(),
            "Built money profile"
        ),
        None => debug!(user_id, "No answer record, onboarding needed"),
    }

    Ok(profile)
}

/// Answer store held in process memory
#[derive(Default)]
pub struct InMemoryAnswerStore {
    records: RwLock<HashMap<String, AnswerRecord>>,
}

impl InMemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user's answers
    pub fn insert(&self, user_id: &str, record: AnswerRecord) -> Result<()> {
        check_user_id(user_id)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| Error::InvalidData("answer store lock poisoned".to_string()))?;
        records.insert(user_id.to_string(), record);
        Ok(())
    }

    /// Remove a user's answers, returning whether any existed
    pub fn remove(&self, user_id: &str) -> Result<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|_| Error::InvalidData("answer store lock poisoned".to_string()))?;
        Ok(records.remove(user_id).is_some())
    }
}

impl AnswerStore for InMemoryAnswerStore {
    fn get_answer_record(&self, user_id: &str) -> Result<Option<AnswerRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| Error::InvalidData("answer store lock poisoned".to_string()))?;
        Ok(records.get(user_id).cloned())
    }
}
