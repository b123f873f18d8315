//! Domain models for Budyy
//!
//! Every coded questionnaire answer is a closed enum with an `Other` variant
//! that keeps an unrecognized code verbatim, so lookups over the known codes
//! are exhaustive matches and unknown codes still round-trip through storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Defines a questionnaire code enum backed by its raw string code.
macro_rules! question_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code outside the known set, kept as answered
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Whether the code is one the questionnaire offers
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            /// An empty code carries no answer
            pub fn is_blank(&self) -> bool {
                self.as_str().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $code => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match Self::from(s.as_str()) {
                    Self::Other(_) => Self::Other(s),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                match code {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

question_code! {
    /// How the user feels about money, from very stressed to very confident
    Feeling {
        VeryStressed => "1_very_stressed",
        Stressed => "2_stressed",
        Neutral => "3_neutral",
        Confident => "4_confident",
        VeryConfident => "5_very_confident",
    }
}

impl Feeling {
    /// Stress level encoded in the code's leading `N_` prefix (1 = very stressed)
    pub fn level(&self) -> Option<u8> {
        match self {
            Self::VeryStressed => Some(1),
            Self::Stressed => Some(2),
            Self::Neutral => Some(3),
            Self::Confident => Some(4),
            Self::VeryConfident => Some(5),
            Self::Other(raw) => {
                let mut chars = raw.chars();
                let digit = chars.next()?.to_digit(10)?;
                (chars.next() == Some('_')).then_some(digit as u8)
            }
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral) || self.as_str().contains("neutral")
    }
}

question_code! {
    /// Monthly take-home income band
    IncomeRange {
        Under500 => "<500",
        From500To1000 => "500_1000",
        From1000To1800 => "1000_1800",
        From1800To2500 => "1800_2500",
        Over2500 => "2500_plus",
    }
}

impl IncomeRange {
    /// Point estimate of monthly income for the band
    pub fn estimate(&self) -> Option<f64> {
        match self {
            Self::Under500 => Some(400.0),
            Self::From500To1000 => Some(750.0),
            Self::From1000To1800 => Some(1400.0),
            Self::From1800To2500 => Some(2150.0),
            Self::Over2500 => Some(2800.0),
            Self::Other(_) => None,
        }
    }
}

question_code! {
    /// Whether the user sends money to family abroad
    SendsMoneyHome {
        No => "no",
        Monthly => "yes_monthly",
        Occasionally => "yes_occasionally",
        Rarely => "yes_rarely",
    }
}

impl SendsMoneyHome {
    pub fn sends_money(&self) -> bool {
        match self {
            Self::No => false,
            Self::Monthly | Self::Occasionally | Self::Rarely => true,
            Self::Other(raw) => raw.starts_with("yes"),
        }
    }
}

question_code! {
    /// How often money runs out before the end of the month
    RunOut {
        Never => "never",
        Sometimes => "sometimes",
        Often => "often",
        AlmostEveryMonth => "almost_every_month",
    }
}

question_code! {
    /// Whether (and how) the user saves
    SavePattern {
        Fixed => "yes_fixed",
        Random => "yes_random",
        No => "no",
    }
}

impl SavePattern {
    pub fn saves(&self) -> bool {
        matches!(self, Self::Fixed | Self::Random)
    }
}

question_code! {
    /// Savings goals offered by the questionnaire
    GoalKey {
        EmergencyFund => "emergency_fund",
        VisaRenewal => "visa_renewal",
        Travel => "travel",
        PayOffDebt => "pay_off_debt",
        HouseDeposit => "house_deposit",
        Education => "education",
        MoveCity => "move_city",
        Investments => "investments",
        Wedding => "wedding",
        Custom => "other",
    }
}

impl GoalKey {
    /// Display label; unknown keys are shown as answered
    pub fn label(&self) -> &str {
        match self {
            Self::EmergencyFund => "Emergency fund",
            Self::VisaRenewal => "Visa renewal",
            Self::Travel => "Travel",
            Self::PayOffDebt => "Pay off debt",
            Self::HouseDeposit => "House deposit",
            Self::Education => "Education",
            Self::MoveCity => "Move city",
            Self::Investments => "Investments",
            Self::Wedding => "Wedding",
            Self::Custom => "Something custom",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

question_code! {
    /// When the user wants to reach their main goal
    GoalTimeline {
        ThreeMonths => "3_months",
        SixMonths => "6_months",
        TwelveMonths => "12_months",
        OneToThreeYears => "1_3_years",
        NotSure => "not_sure",
    }
}

impl GoalTimeline {
    /// Display label; unknown codes are shown as answered
    pub fn label(&self) -> &str {
        match self {
            Self::ThreeMonths => "3 months",
            Self::SixMonths => "6 months",
            Self::TwelveMonths => "12 months",
            Self::OneToThreeYears => "1–3 years",
            Self::NotSure => "Not sure yet",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Months to spread the goal amount over
    pub fn months(&self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
            Self::OneToThreeYears => 24,
            Self::NotSure | Self::Other(_) => 12,
        }
    }
}

question_code! {
    /// Things the user says make money harder to manage
    Friction {
        HighRent => "high_rent",
        UnexpectedExpenses => "unexpected_expenses",
        SendingHome => "sending_home",
        EatingOut => "eating_out",
        Subscriptions => "subscriptions",
        Shopping => "shopping",
        Debt => "debt",
        NotTracking => "not_tracking",
    }
}

impl Friction {
    /// Pressure label, `None` for codes outside the known set
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::HighRent => Some("High rent"),
            Self::UnexpectedExpenses => Some("Unexpected expenses"),
            Self::SendingHome => Some("Sending money home"),
            Self::EatingOut => Some("Eating out"),
            Self::Subscriptions => Some("Subscriptions"),
            Self::Shopping => Some("Shopping"),
            Self::Debt => Some("Debt"),
            Self::NotTracking => Some("Not tracking spending"),
            Self::Other(_) => None,
        }
    }
}

/// Questionnaire answers for one user
///
/// Field names follow the API; the original questionnaire column names
/// (`q1_purpose` .. `q16_depth`) are accepted as aliases so exported rows
/// can be imported directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Why the user is here (not interpreted by the profile engine)
    #[serde(default, alias = "q1_purpose", deserialize_with = "null_as_empty")]
    pub purposes: Vec<String>,
    #[serde(default, alias = "q2_feel_money")]
    pub feeling: Option<Feeling>,
    /// Self-description, e.g. `intl_student` or `working_professional`
    #[serde(default, alias = "q3_profile")]
    pub profile: Option<String>,
    #[serde(default, alias = "q4_income_range")]
    pub income_range: Option<IncomeRange>,
    /// Free text, e.g. "£1,100"
    #[serde(default, alias = "q5_rent")]
    pub rent_text: Option<String>,
    #[serde(default, alias = "q6_send_home")]
    pub sends_money_home: Option<SendsMoneyHome>,
    /// Every goal the user is interested in
    #[serde(default, alias = "q7_goals", deserialize_with = "null_as_empty")]
    pub goals: Vec<GoalKey>,
    #[serde(default, alias = "q8_top_goal")]
    pub top_goal: Option<GoalKey>,
    #[serde(default, alias = "q9_goal_timeline")]
    pub goal_timeline: Option<GoalTimeline>,
    /// Free text, same format as `rent_text`
    #[serde(default, alias = "q10_goal_amount")]
    pub goal_amount_text: Option<String>,
    #[serde(default, alias = "q11_frictions", deserialize_with = "null_as_empty")]
    pub frictions: Vec<Friction>,
    #[serde(default, alias = "q12_run_out")]
    pub run_out: Option<RunOut>,
    #[serde(default, alias = "q13_save_pattern")]
    pub save_pattern: Option<SavePattern>,
    /// Requested help features
    #[serde(default, alias = "q14_help", deserialize_with = "null_as_empty")]
    pub help: Vec<String>,
    #[serde(default, alias = "q15_tone")]
    pub tone: Option<String>,
    #[serde(default, alias = "q16_depth")]
    pub detail_level: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnswerRecord {
    /// Answers the questionnaire insists on before a record is submitted
    ///
    /// The profile engine never requires these; a partial record still gets
    /// a best-effort profile.
    pub fn missing_required(&self) -> Vec<MissingAnswer> {
        let mut missing = Vec::new();

        if self.purposes.iter().all(|p| p.is_empty()) {
            missing.push(MissingAnswer::Purposes);
        }
        if is_blank_text(self.profile.as_deref()) {
            missing.push(MissingAnswer::Profile);
        }
        if self.feeling.as_ref().map_or(true, Feeling::is_blank) {
            missing.push(MissingAnswer::Feeling);
        }
        if self.income_range.as_ref().map_or(true, IncomeRange::is_blank) {
            missing.push(MissingAnswer::IncomeRange);
        }
        if self.top_goal.as_ref().map_or(true, GoalKey::is_blank) {
            missing.push(MissingAnswer::TopGoal);
        }

        missing
    }

    /// Fail with [`Error::IncompleteAnswers`] when required answers are missing
    pub fn require_complete(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::IncompleteAnswers(missing))
        }
    }
}

/// Reject user ids that are empty or only whitespace
pub(crate) fn check_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(Error::InvalidData("user id must not be empty".to_string()));
    }
    Ok(())
}

fn is_blank_text(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// A required questionnaire answer that was not given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAnswer {
    Purposes,
    Profile,
    Feeling,
    IncomeRange,
    TopGoal,
}

impl MissingAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purposes => "purposes",
            Self::Profile => "profile",
            Self::Feeling => "feeling",
            Self::IncomeRange => "income_range",
            Self::TopGoal => "top_goal",
        }
    }

    /// Questionnaire step (1-based) the answer belongs to
    pub fn step(&self) -> u8 {
        match self {
            Self::Purposes | Self::Profile => 1,
            Self::Feeling | Self::IncomeRange => 2,
            Self::TopGoal => 3,
        }
    }

    /// Prompt shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Purposes => "Choose at least one reason for using Budyy",
            Self::Profile => "Tell us how you'd describe yourself",
            Self::Feeling => "Tell us how you feel about money",
            Self::IncomeRange => "Choose your monthly income range",
            Self::TopGoal => "Choose one main goal",
        }
    }
}

impl std::fmt::Display for MissingAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored answer record's bookkeeping, without the answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecordSummary {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
