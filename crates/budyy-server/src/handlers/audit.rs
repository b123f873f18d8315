//! Audit log handlers

use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;

use crate::{Actor, ApiQuery, AppError, AppState, MAX_PAGE_LIMIT};
use budyy_core::AuditEntry;

/// Query parameters for audit log
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    #[serde(default = "default_audit_limit")]
    pub limit: i64,
}

fn default_audit_limit() -> i64 {
    100
}

/// GET /api/audit - List audit log entries
pub async fn list_audit_log(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<AuditQuery>,
    actor: Actor,
) -> Result<Json<Vec<AuditEntry>>, AppError> {    let limit = params.limit.clamp(1, MAX_PAGE_LIMIT);

    let entries = state.db.list_audit_log(limit)?;

    // Audit log - viewing the audit log itself
    state.db.log_audit(
        actor.as_str(),
        "list",
        Some("audit_log"),
        None,
        Some(&format!("limit={}", limit)),
    )?;

    Ok(Json(entries))
}
