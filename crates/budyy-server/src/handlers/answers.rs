//! Answer record handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Actor, ApiJson, ApiQuery, AppError, AppState, SuccessResponse};
use budyy_core::{AnswerRecord, AnswerRecordSummary, Error, MissingAnswer};

/// Query parameters for saving answers
#[derive(Debug, Default, Deserialize)]
pub struct SaveAnswersQuery {
    /// Store the record even when required answers are missing
    #[serde(default)]
    pub partial: bool,
}

/// Response for a stored answer record
#[derive(Debug, Serialize)]
pub struct SaveAnswersResponse {
    pub user_id: String,
    /// Whether every required answer was given
    pub complete: bool,
    pub missing: Vec<MissingAnswer>,
}

/// GET /api/answers - List users with stored answers
pub async fn list_answers(
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Json<Vec<AnswerRecordSummary>>, AppError> {
    let records = state.db.list_answer_records()?;

    state.db.log_audit(
        actor.as_str(),
        "list",
        Some("answers"),
        None,
        Some(&format!("count={}", records.len())),
    )?;

    Ok(Json(records))
}

/// GET /api/answers/:user_id - Get a user's stored answers
pub async fn get_answers(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    actor: Actor,
) -> Result<Json<AnswerRecord>, AppError> {
    let record = state
        .db
        .get_answer_record(&user_id)?
        .ok_or_else(|| AppError::not_found("No answers stored for this user"))?;

    state
        .db
        .log_audit(actor.as_str(), "view", Some("answers"), Some(&user_id), None)?;

    Ok(Json(record))
}

/// PUT /api/answers/:user_id - Submit or replace a user's answers
///
/// Incomplete submissions are rejected with the missing answers listed,
/// unless `?partial=true` is given.
pub async fn put_answers(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    ApiQuery(params): ApiQuery<SaveAnswersQuery>,
    actor: Actor,
    ApiJson(record): ApiJson<AnswerRecord>,
) -> Result<Json<SaveAnswersResponse>, AppError> {
    let missing = record.missing_required();
    if !missing.is_empty() && !params.partial {
        return Err(AppError::incomplete(missing));
    }

    match state.db.upsert_answer_record(&user_id, &record) {
        Ok(()) => {}
        Err(Error::InvalidData(msg)) => return Err(AppError::bad_request(&msg)),
        Err(e) => return Err(e.into()),
    }

    state.db.log_audit(
        actor.as_str(),
        "update",
        Some("answers"),
        Some(&user_id),
        Some(&format!("partial={}, missing={}", params.partial, missing.len())),
    )?;

    info!(user_id = %user_id, complete = missing.is_empty(), "Answers submitted");

    Ok(Json(SaveAnswersResponse {
        user_id,
        complete: missing.is_empty(),
        missing,
    }))
}

/// DELETE /api/answers/:user_id - Remove a user's answers
pub async fn delete_answers(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    actor: Actor,
) -> Result<Json<SuccessResponse>, AppError> {
    if !state.db.delete_answer_record(&user_id)? {
        return Err(AppError::not_found("No answers stored for this user"));
    }

    state
        .db
        .log_audit(actor.as_str(), "delete", Some("answers"), Some(&user_id), None)?;

    Ok(Json(SuccessResponse { success: true }))
}
