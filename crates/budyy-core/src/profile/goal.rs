//! Main goal resolution and monthly saving suggestion

use super::estimate::{parse_amount, round_half_up};
use super::MainGoal;
use crate::models::{GoalKey, GoalTimeline};

/// Largest share of monthly income a goal suggestion may ask for
pub const MAX_SAVING_SHARE: f64 = 0.4;

/// Label used when an amount was given without choosing a goal
const UNNAMED_GOAL_LABEL: &str = "Main goal";

/// Resolve the user's main goal, `None` when neither a goal nor an amount was given
pub fn resolve_main_goal(
    top_goal: Option<&GoalKey>,
    timeline: Option<&GoalTimeline>,
    amount_text: Option<&str>,
    income: Option<f64>,
) -> Option<MainGoal> {
    let top_goal = top_goal.filter(|g| !g.is_blank());
    let timeline = timeline.filter(|t| !t.is_blank());

    let label = top_goal.map(|g| g.label().to_string()).filter(|l| !l.is_empty());
    let amount = parse_amount(amount_text);
    let has_amount = amount.is_some_and(|a| a != 0.0);

    if label.is_none() && !has_amount {
        return None;
    }

    let suggested_monthly = match (amount, timeline, income) {
        (Some(amount), Some(timeline), Some(income)) if has_amount && income != 0.0 => {
            suggest_monthly(amount, timeline, income)
        }
        _ => None,
    };

    Some(MainGoal {
        key: top_goal.map(|g| g.as_str().to_string()).unwrap_or_default(),
        label: label.unwrap_or_else(|| UNNAMED_GOAL_LABEL.to_string()),
        timeline_label: timeline.map(|t| t.label().to_string()),
        amount,
        suggested_monthly,
    })
}

/// Spread the amount over the timeline, capped at a share of income
fn suggest_monthly(amount: f64, timeline: &GoalTimeline, income: f64) -> Option<f64> {
    let cap = income * MAX_SAVING_SHARE;
    let monthly = (amount / f64::from(timeline.months())).min(cap);

    if monthly == 0.0 {
        None
    } else {
        Some(round_half_up(monthly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(
        key: Option<&str>,
        timeline: Option<&str>,
        amount: Option<&str>,
        income: Option<f64>,
    ) -> Option<MainGoal> {
        let key = key.map(GoalKey::from);
        let timeline = timeline.map(GoalTimeline::from);
        resolve_main_goal(key.as_ref(), timeline.as_ref(), amount, income)
    }

    #[test]
    fn test_suggestion_under_cap_is_unclamped() {
        let result = goal(Some("travel"), Some("6_months"), Some("1200"), Some(1400.0)).unwrap();
        assert_eq!(result.key, "travel");
        assert_eq!(result.label, "Travel");
        assert_eq!(result.timeline_label.as_deref(), Some("6 months"));
        assert_eq!(result.amount, Some(1200.0));
        assert_eq!(result.suggested_monthly, Some(200.0));
    }

    #[test]
    fn test_suggestion_is_capped_at_share_of_income() {
        let result = goal(
            Some("emergency_fund"),
            Some("3_months"),
            Some("10000"),
            Some(1400.0),
        )
        .unwrap();
        assert_eq!(result.suggested_monthly, Some(560.0));
    }

    #[test]
    fn test_suggestion_rounds_to_whole_units() {
        // 1000 / 3 = 333.33
        let result = goal(Some("wedding"), Some("3_months"), Some("£1,000"), Some(2800.0)).unwrap();
        assert_eq!(result.suggested_monthly, Some(333.0));

        // 1000 / 24 = 41.67
        let result = goal(Some("wedding"), Some("1_3_years"), Some("1000"), Some(2800.0)).unwrap();
        assert_eq!(result.suggested_monthly, Some(42.0));
    }

    #[test]
    fn test_unknown_timeline_spreads_over_a_year() {
        let result = goal(Some("education"), Some("someday"), Some("2400"), Some(2150.0)).unwrap();
        assert_eq!(result.timeline_label.as_deref(), Some("someday"));
        assert_eq!(result.suggested_monthly, Some(200.0));

        let result = goal(Some("education"), Some("not_sure"), Some("2400"), Some(2150.0)).unwrap();
        assert_eq!(result.timeline_label.as_deref(), Some("Not sure yet"));
        assert_eq!(result.suggested_monthly, Some(200.0));
    }

    #[test]
    fn test_no_suggestion_without_inputs() {
        let no_income = goal(Some("travel"), Some("6_months"), Some("1200"), None).unwrap();
        assert_eq!(no_income.suggested_monthly, None);

        let no_timeline = goal(Some("travel"), None, Some("1200"), Some(1400.0)).unwrap();
        assert_eq!(no_timeline.suggested_monthly, None);
        assert_eq!(no_timeline.timeline_label, None);

        let no_amount = goal(Some("travel"), Some("6_months"), Some("Not sure"), Some(1400.0))
            .unwrap();
        assert_eq!(no_amount.amount, None);
        assert_eq!(no_amount.suggested_monthly, None);
    }

    #[test]
    fn test_unknown_key_passes_through_as_label() {
        let result = goal(Some("new_car"), None, None, None).unwrap();
        assert_eq!(result.key, "new_car");
        assert_eq!(result.label, "new_car");

        let result = goal(Some("other"), None, None, None).unwrap();
        assert_eq!(result.label, "Something custom");
    }

    #[test]
    fn test_amount_without_goal_gets_generic_label() {
        let result = goal(None, Some("12_months"), Some("600"), Some(750.0)).unwrap();
        assert_eq!(result.key, "");
        assert_eq!(result.label, "Main goal");
        assert_eq!(result.suggested_monthly, Some(50.0));
    }

    #[test]
    fn test_blank_timeline_is_unanswered() {
        let result = goal(Some("travel"), Some(""), Some("1200"), Some(1400.0)).unwrap();
        assert_eq!(result.timeline_label, None);
        assert_eq!(result.amount, Some(1200.0));
        assert_eq!(result.suggested_monthly, None);
    }

    #[test]
    fn test_blank_goal_with_amount_gets_generic_label() {
        let result = goal(Some(""), Some("6_months"), Some("600"), Some(1400.0)).unwrap();
        assert_eq!(result.key, "");
        assert_eq!(result.label, "Main goal");
        assert_eq!(result.suggested_monthly, Some(100.0));
    }

    #[test]
    fn test_no_goal_and_no_amount_is_none() {
        assert!(goal(None, Some("6_months"), None, Some(1400.0)).is_none());
        assert!(goal(None, None, Some("Not sure"), Some(1400.0)).is_none());
        assert!(goal(Some(""), None, Some("0"), Some(1400.0)).is_none());
    }

    #[test]
    fn test_zero_amount_keeps_goal_without_suggestion() {
        let result = goal(Some("travel"), Some("6_months"), Some("0"), Some(1400.0)).unwrap();
        assert_eq!(result.amount, Some(0.0));
        assert_eq!(result.suggested_monthly, None);
    }
}
