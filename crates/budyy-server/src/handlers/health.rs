//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health - Liveness check, reachable without credentials
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
