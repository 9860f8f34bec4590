//! Health handler

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub catalog: CatalogCounts,
}

/// Record counts of the loaded catalog
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCounts {
    pub innovations: usize,
    pub techniques: usize,
    pub timeline_events: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        catalog: CatalogCounts {
            innovations: state.catalog.innovations().len(),
            techniques: state.catalog.techniques().len(),
            timeline_events: state.catalog.timeline_events().len(),
        },
    })
}
