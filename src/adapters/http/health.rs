//! Liveness endpoint.

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

/// Response body for the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// State for the health endpoint.
#[derive(Debug, Clone)]
pub struct HealthAppState {
    pub service_name: String,
}

impl HealthAppState {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

/// GET /
pub async fn health_check(State(state): State<HealthAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name,
    })
}

/// Creates the health router.
pub fn health_router() -> Router<HealthAppState> {
    Router::new().route("/", get(health_check))
}
