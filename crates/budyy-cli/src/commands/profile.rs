//! Money profile commands (profile, preview)

use std::path::Path;

use anyhow::Result;
use budyy_core::db::Database;
use budyy_core::{build_money_profile, load_money_profile, MoneyProfile, Stability};

use super::{format_pounds, read_answer_file, CLI_ACTOR};

pub fn cmd_profile(db: &Database, user_id: &str, json: bool) -> Result<()> {
    let profile = load_money_profile(db, user_id)?;
    db.log_audit(CLI_ACTOR, "view", Some("profile"), Some(user_id), None)?;

    match profile {
        Some(profile) => print_profile(&profile, json),
        None if json => {
            println!("null");
            Ok(())
        }
        None => {
            println!();
            println!("👋 Let's get to know you first");
            println!("   '{}' hasn't answered the questionnaire yet.", user_id);
            println!("   Import answers: budyy answers import --file answers.json --user {}", user_id);
            println!();
            Ok(())
        }
    }
}

pub fn cmd_preview(file: &Path, json: bool) -> Result<()> {
    let (record, _) = read_answer_file(file)?;
    match build_money_profile(Some(&record)) {
        Some(profile) => print_profile(&profile, json),
        None => Ok(()),
    }
}

fn stability_icon(stability: Stability) -> &'static str {
    match stability {
        Stability::Stable => "🟢",
        Stability::Okay => "🟡",
        Stability::Stretched => "🟠",
        Stability::AtRisk => "🔴",
    }
}

fn print_profile(profile: &MoneyProfile, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!();
    println!("💷 Money Profile");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {} {}",
        stability_icon(profile.stability),
        profile.stability_label
    );
    println!("      {}", profile.stability_description);
    println!();

    match profile.estimated_income {
        Some(income) => println!("   Income (est.):  {}/month", format_pounds(income)),
        None => println!("   Income (est.):  unknown"),
    }
    match profile.estimated_rent {
        Some(rent) => match profile.rent_share_percent() {
            Some(pct) => println!(
                "   Rent:           {}/month ({}% of income)",
                format_pounds(rent),
                pct
            ),
            None => println!("   Rent:           {}/month", format_pounds(rent)),
        },
        None => println!("   Rent:           unknown"),
    }

    if let Some(goal) = &profile.main_goal {
        println!();
        println!("   🎯 {}", goal.label);
        if let Some(timeline) = &goal.timeline_label {
            println!("      Timeline:  {}", timeline);
        }
        if let Some(amount) = goal.amount {
            println!("      Target:    {}", format_pounds(amount));
        }
        if let Some(monthly) = goal.suggested_monthly {
            println!("      Suggested: {}/month", format_pounds(monthly));
        }
    }

    if !profile.pressures.is_empty() {
        println!();
        println!("   ⚠️  Pressures");
        for pressure in &profile.pressures {
            println!("      • {}", pressure);
        }
    }

    if profile.tone.is_some() || profile.detail_level.is_some() {
        println!();
        println!(
            "   Tone: {}  Detail: {}",
            profile.tone.as_deref().unwrap_or("-"),
            profile.detail_level.as_deref().unwrap_or("-")
        );
    }
    println!();

    Ok(())
}
