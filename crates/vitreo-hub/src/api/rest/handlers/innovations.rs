//! Innovation handlers

use crate::api::rest::params::ListParams;
use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;
use vitreo_catalog::InnovationQuery;
use vitreo_types::{Innovation, Technique};

/// Filtered innovation list
#[derive(Debug, Serialize)]
pub struct InnovationListResponse {
    /// Size of the unfiltered set
    pub total: usize,
    pub items: Vec<Innovation>,
}

/// One innovation with the techniques that reference it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnovationDetailResponse {
    pub innovation: Innovation,
    pub related_techniques: Vec<Technique>,
}

/// List innovations, filtered by `category` and `q`
pub async fn list_innovations(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<InnovationListResponse>> {
    let Query(params) = params?;
    let query: InnovationQuery = params.list_query()?;
    let all = state.catalog.innovations();
    let items = query.apply(all).into_iter().cloned().collect();

    Ok(Json(InnovationListResponse {
        total: all.len(),
        items,
    }))
}

/// Get a specific innovation
pub async fn get_innovation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<InnovationDetailResponse>> {
    let innovation = state
        .catalog
        .innovation_by_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Innovation {} not found", id)))?;

    let related_techniques = state
        .catalog
        .techniques_using(innovation.id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(InnovationDetailResponse {
        innovation: innovation.clone(),
        related_techniques,
    }))
}
