//! Money profile handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{Actor, ApiJson, AppError, AppState};
use budyy_core::{load_money_profile, AnswerRecord, MoneyProfile};

/// A user's profile, or a signal that onboarding comes first
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub needs_onboarding: bool,
    pub profile: Option<MoneyProfile>,
}

/// GET /api/profile/:user_id - Derive the money profile from stored answers
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    actor: Actor,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = load_money_profile(&state.db, &user_id)?;

    state.db.log_audit(
        actor.as_str(),
        "view",
        Some("profile"),
        Some(&user_id),
        profile.as_ref().map(|p| p.stability.as_str()),
    )?;

    Ok(Json(ProfileResponse {
        user_id,
        needs_onboarding: profile.is_none(),
        profile,
    }))
}

/// POST /api/profile/preview - Derive a profile from posted answers without storing them
pub async fn preview_profile(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    ApiJson(record): ApiJson<AnswerRecord>,
) -> Result<Json<MoneyProfile>, AppError> {
    let profile = MoneyProfile::from_answers(&record);

    state
        .db
        .log_audit(actor.as_str(), "preview", Some("profile"), None, None)?;

    Ok(Json(profile))
}
