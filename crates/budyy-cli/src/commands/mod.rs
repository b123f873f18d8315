//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `answers` - Answer record commands (list, show, import, delete)
//! - `core` - Core commands (init) and shared utilities (open_db)
//! - `profile` - Money profile commands (profile, preview)
//! - `serve` - Web server command
//! - `status` - Database status command

pub mod answers;
pub mod core;
pub mod profile;
pub mod serve;
pub mod status;

// Re-export command functions for main.rs
pub use answers::*;
pub use core::*;
pub use profile::*;
pub use serve::*;
pub use status::*;

/// Format an amount as whole pounds with thousands separators
pub fn format_pounds(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
