//! Stability classification
//!
//! An ordered decision table: the first matching rule wins. The rules
//! overlap, so a very stressed user who only sometimes runs out of money
//! lands on "Okay-ish" rather than "At risk".

use serde::{Deserialize, Serialize};

use crate::models::{Feeling, RunOut, SavePattern};

/// Qualitative cash-flow health bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Okay,
    Stretched,
    AtRisk,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Okay => "okay",
            Self::Stretched => "stretched",
            Self::AtRisk => "at_risk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Okay => "Okay-ish",
            Self::Stretched => "Stretched",
            Self::AtRisk => "At risk",
        }
    }
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Stability {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Self::Stable),
            "okay" => Ok(Self::Okay),
            "stretched" => Ok(Self::Stretched),
            "at_risk" => Ok(Self::AtRisk),
            _ => Err(format!("Unknown stability: {}", s)),
        }
    }
}

const STABLE_DESCRIPTION: &str = "You’re generally on top of things, with some room to optimise.";
const OKAY_DESCRIPTION: &str = "Things mostly work, but some months feel tighter than others.";
const STRETCHED_DESCRIPTION: &str =
    "Cash flow feels tight and money often runs out before the month ends.";
const AT_RISK_DESCRIPTION: &str =
    "Money feels very stressful right now. Budyy will focus on stabilising first.";
const UNCLEAR_DESCRIPTION: &str = "We’ll get a clearer picture once your accounts are connected.";

/// Outcome of the stability rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilityAssessment {
    pub stability: Stability,
    pub label: &'static str,
    pub description: &'static str,
}

impl StabilityAssessment {
    fn new(stability: Stability, description: &'static str) -> Self {
        Self {
            stability,
            label: stability.label(),
            description,
        }
    }
}

/// Classify cash-flow stability from feeling, run-out and saving answers
pub fn classify_stability(
    feeling: Option<&Feeling>,
    run_out: Option<&RunOut>,
    save_pattern: Option<&SavePattern>,
) -> StabilityAssessment {
    let level = feeling.and_then(Feeling::level);
    let neutral = feeling.is_some_and(Feeling::is_neutral);
    let rarely_runs_out = matches!(run_out, Some(RunOut::Never | RunOut::Sometimes));
    let saves = save_pattern.is_some_and(SavePattern::saves);

    if matches!(level, Some(4 | 5)) && rarely_runs_out && saves {
        return StabilityAssessment::new(Stability::Stable, STABLE_DESCRIPTION);
    }

    if level == Some(3) || neutral || run_out == Some(&RunOut::Sometimes) {
        return StabilityAssessment::new(Stability::Okay, OKAY_DESCRIPTION);
    }

    if matches!(run_out, Some(RunOut::Often | RunOut::AlmostEveryMonth)) {
        return StabilityAssessment::new(Stability::Stretched, STRETCHED_DESCRIPTION);
    }

    if matches!(level, Some(1 | 2)) {
        return StabilityAssessment::new(Stability::AtRisk, AT_RISK_DESCRIPTION);
    }

    StabilityAssessment::new(Stability::Okay, UNCLEAR_DESCRIPTION)
}
