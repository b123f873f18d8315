//! Budyy Core Library
//!
//! Shared functionality for the Budyy money guidance app:
//! - Typed questionnaire answers (the answer record)
//! - Money profile engine: stability, main goal and spending pressures
//! - Answer record store (encrypted SQLite) and an in-memory store
//! - Audit logging

pub mod db;
pub mod error;
pub mod models;
pub mod profile;
pub mod store;

pub use db::{AuditEntry, Database};
pub use error::{Error, Result};
pub use models::{AnswerRecord, AnswerRecordSummary, MissingAnswer};
pub use profile::{build_money_profile, MainGoal, MoneyProfile, Stability};
pub use store::{load_money_profile, AnswerStore, InMemoryAnswerStore};
