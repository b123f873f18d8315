//! Numeric estimates from questionnaire answers

use crate::models::IncomeRange;

/// Monthly income point estimate for an income band, `None` if unanswered or unknown
pub fn estimate_income(range: Option<&IncomeRange>) -> Option<f64> {
    range.and_then(IncomeRange::estimate)
}

/// Parse a free-text money amount such as "£1,100" or "950 "
///
/// Pound signs, thousands separators and whitespace are ignored. Anything
/// that is empty or does not leave a finite number ("Not sure") is `None`.
///
/// Input that is nothing but separators ("£", "  ") is also `None`. The
/// mobile app's parser reads it as 0; an unanswered amount is the better fit.
pub fn parse_amount(raw: Option<&str>) -> Option<f64> {
    let raw = raw.filter(|s| !s.is_empty())?;

    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '£' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Round to the nearest whole unit, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
