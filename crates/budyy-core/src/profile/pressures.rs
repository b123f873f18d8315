//! Spending pressure aggregation

use crate::models::{Friction, SendsMoneyHome};

pub const RENT_OVER_HALF: &str = "Rent is using 50%+ of income";
pub const RENT_FORTY_TO_FIFTY: &str = "Rent is using ~40–50% of income";
pub const SENDING_MONEY_HOME: &str = "Sending money home";

/// Collect pressure labels in detection order: frictions, rent ratio, remittances
///
/// Unknown friction codes are dropped. Labels are never repeated.
pub fn collect_pressures(
    frictions: &[Friction],
    rent: Option<f64>,
    income: Option<f64>,
    sends_money_home: Option<&SendsMoneyHome>,
) -> Vec<String> {
    let mut pressures = Vec::new();

    for label in frictions.iter().filter_map(Friction::label) {
        push_unique(&mut pressures, label);
    }

    if let (Some(rent), Some(income)) = (rent, income) {
        if rent != 0.0 && income != 0.0 {
            let ratio = rent / income;
            if ratio >= 0.5 {
                push_unique(&mut pressures, RENT_OVER_HALF);
            } else if ratio >= 0.4 {
                push_unique(&mut pressures, RENT_FORTY_TO_FIFTY);
            }
        }
    }

    if sends_money_home.is_some_and(SendsMoneyHome::sends_money) {
        push_unique(&mut pressures, SENDING_MONEY_HOME);
    }

    pressures
}

fn push_unique(pressures: &mut Vec<String>, label: &str) {
    if !pressures.iter().any(|p| p == label) {
        pressures.push(label.to_string());
    }
}
