//! Money Profile Engine
//!
//! Derives a qualitative money profile from a user's questionnaire answers.
//! The engine is a pure function of the [`AnswerRecord`] with no error path.
//! Missing or malformed answers degrade to `None` for the values derived
//! from them.
//!
//! ## Stages
//!
//! - **Estimate** - income band point estimate, free-text amount parsing
//! - **Stability** - ordered rule table over feeling, run-out and saving answers
//! - **Goal** - main goal label and a capped monthly saving suggestion
//! - **Pressures** - frictions plus rent-ratio and remittance signals
//!
//! ## Usage
//!
//! ```rust
//! use budyy_core::models::{AnswerRecord, Feeling};
//! use budyy_core::profile::{build_money_profile, Stability};
//!
//! let answers = AnswerRecord {
//!     feeling: Some(Feeling::Neutral),
//!     ..Default::default()
//! };
//! let profile = build_money_profile(Some(&answers)).unwrap();
//! assert_eq!(profile.stability, Stability::Okay);
//! assert!(build_money_profile(None).is_none());
//! ```

pub mod estimate;
pub mod goal;
pub mod pressures;
pub mod stability;

use serde::{Deserialize, Serialize};

use crate::models::AnswerRecord;

pub use estimate::{estimate_income, parse_amount};
pub use goal::{resolve_main_goal, MAX_SAVING_SHARE};
pub use pressures::collect_pressures;
pub use stability::{classify_stability, Stability, StabilityAssessment};

/// Derived money profile for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyProfile {
    pub stability: Stability,
    pub stability_label: String,
    pub stability_description: String,
    /// Monthly income point estimate from the income band
    pub estimated_income: Option<f64>,
    /// Monthly rent parsed from the free-text answer
    pub estimated_rent: Option<f64>,
    /// Rent as a fraction of income
    pub rent_share: Option<f64>,
    /// Human-readable pressures, in detection order
    pub pressures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_goal: Option<MainGoal>,
    pub tone: Option<String>,
    pub detail_level: Option<String>,
}

/// The goal the user wants to work toward first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainGoal {
    /// Goal code as answered, empty when only an amount was given
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_label: Option<String>,
    pub amount: Option<f64>,
    /// Whole-unit monthly saving, at most 40% of estimated income
    pub suggested_monthly: Option<f64>,
}

impl MoneyProfile {
    /// Run every stage over the answers and assemble the profile
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        let estimated_income = estimate_income(answers.income_range.as_ref());
        let estimated_rent = parse_amount(answers.rent_text.as_deref());
        let rent_share = match (estimated_rent, estimated_income) {
            (Some(rent), Some(income)) => Some(rent / income),
            _ => None,
        };

        let stability = classify_stability(
            answers.feeling.as_ref(),
            answers.run_out.as_ref(),
            answers.save_pattern.as_ref(),
        );
        let main_goal = resolve_main_goal(
            answers.top_goal.as_ref(),
            answers.goal_timeline.as_ref(),
            answers.goal_amount_text.as_deref(),
            estimated_income,
        );
        let pressures = collect_pressures(
            &answers.frictions,
            estimated_rent,
            estimated_income,
            answers.sends_money_home.as_ref(),
        );

        Self {
            stability: stability.stability,
            stability_label: stability.label.to_string(),
            stability_description: stability.description.to_string(),
            estimated_income,
            estimated_rent,
            rent_share,
            pressures,
            main_goal,
            tone: answers.tone.clone(),
            detail_level: answers.detail_level.clone(),
        }
    }

    /// Rent share as a whole percentage, for display
    pub fn rent_share_percent(&self) -> Option<i64> {
        self.rent_share
            .map(|share| estimate::round_half_up(share * 100.0) as i64)
    }
}

/// Build a money profile, `None` when the user has no answer record yet
pub fn build_money_profile(answers: Option<&AnswerRecord>) -> Option<MoneyProfile> {
    answers.map(MoneyProfile::from_answers)
}
