//! Health check endpoint
//!
//! Always answers 200; a failed probe only changes `statusBD`.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub descricao: String,
    pub autor: String,
    #[serde(rename = "statusBD")]
    pub status_bd: String,
}

/// GET /
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status_bd = match state.store().ping().await {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "database liveness probe failed");
            e.to_string()
        }
    };

    let info = state.info();
    Json(HealthResponse {
        descricao: info.descricao.clone(),
        autor: info.autor.clone(),
        status_bd,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}
