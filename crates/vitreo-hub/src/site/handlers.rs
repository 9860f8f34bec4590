//! HTML page handlers

use super::pages::{home, innovations, research, status, techniques, timeline};
use crate::api::rest::params::{ListParams, TimelineParams};
use crate::api::rest::state::AppState;
use crate::error::{PageError, PageResult};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{StatusCode, Uri},
    response::Html,
};
use vitreo_catalog::{Dashboard, InnovationQuery, TechniqueQuery, TimelineView};

pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    let dashboard = Dashboard::build(state.catalog.as_ref(), state.dashboard_params());
    Html(home::render(&state.site.title, &dashboard))
}

pub async fn innovation_list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> PageResult<Html<String>> {
    let Query(params) = params?;
    let query: InnovationQuery = params.list_query()?;
    let all = state.catalog.innovations();
    let results = query.apply(all);
    Ok(Html(innovations::render_list(
        &state.site.title,
        all.len(),
        &query,
        &results,
    )))
}

pub async fn innovation_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let innovation = state
        .catalog
        .innovation_by_id(&id)
        .ok_or_else(|| PageError::NotFound(format!("Innovation {} not found", id)))?;
    let techniques = state.catalog.techniques_using(innovation.id);
    Ok(Html(innovations::render_detail(
        &state.site.title,
        innovation,
        &techniques,
    )))
}

pub async fn technique_list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> PageResult<Html<String>> {
    let Query(params) = params?;
    let query: TechniqueQuery = params.list_query()?;
    let all = state.catalog.techniques();
    let results = query.apply(all);
    Ok(Html(techniques::render_list(
        &state.site.title,
        all.len(),
        &query,
        &results,
    )))
}

pub async fn technique_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let technique = state
        .catalog
        .technique_by_id(&id)
        .ok_or_else(|| PageError::NotFound(format!("Technique {} not found", id)))?;
    let related = state.catalog.related_innovations(technique);
    Ok(Html(techniques::render_detail(
        &state.site.title,
        technique,
        &related,
    )))
}

pub async fn timeline_page(
    State(state): State<AppState>,
    params: Result<Query<TimelineParams>, QueryRejection>,
) -> PageResult<Html<String>> {
    let Query(params) = params?;
    let view = TimelineView::build(state.catalog.timeline_events(), params.filter()?);
    Ok(Html(timeline::render(
        &state.site.title,
        &view,
        state.site.founding_year,
    )))
}

pub async fn research_page(State(state): State<AppState>) -> Html<String> {
    Html(research::render(&state.site.title))
}

/// Fallback for unknown page paths
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = %uri.path(), "No page for path");
    (StatusCode::NOT_FOUND, Html(status::not_found(&state.site.title)))
}
