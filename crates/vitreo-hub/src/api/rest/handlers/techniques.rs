//! Technique handlers

use crate::api::rest::params::ListParams;
use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;
use vitreo_catalog::TechniqueQuery;
use vitreo_types::{Innovation, Technique};

/// Filtered technique list
#[derive(Debug, Serialize)]
pub struct TechniqueListResponse {
    /// Size of the unfiltered set
    pub total: usize,
    pub items: Vec<Technique>,
}

/// One technique with its resolved related innovations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueDetailResponse {
    pub technique: Technique,
    /// Unresolvable ids are already dropped
    pub related_innovations: Vec<Innovation>,
}

/// List techniques, filtered by `category` and `q`
pub async fn list_techniques(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<TechniqueListResponse>> {
    let Query(params) = params?;
    let query: TechniqueQuery = params.list_query()?;
    let all = state.catalog.techniques();
    let items = query.apply(all).into_iter().cloned().collect();

    Ok(Json(TechniqueListResponse {
        total: all.len(),
        items,
    }))
}

/// Get a specific technique
pub async fn get_technique(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TechniqueDetailResponse>> {
    let technique = state
        .catalog
        .technique_by_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Technique {} not found", id)))?;

    let related_innovations = state
        .catalog
        .related_innovations(technique)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(TechniqueDetailResponse {
        technique: technique.clone(),
        related_innovations,
    }))
}
