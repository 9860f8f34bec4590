//! Timeline and dashboard handlers
//!
//! Both views borrow from the catalog, so they are serialized in place
//! instead of being returned as owned `Json<T>`.

use crate::api::rest::params::TimelineParams;
use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use vitreo_catalog::{Dashboard, TimelineView};

/// Timeline grouped by decade, filtered by `significance`
pub async fn get_timeline(
    State(state): State<AppState>,
    params: Result<Query<TimelineParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let filter = params.filter()?;
    let view = TimelineView::build(state.catalog.timeline_events(), filter);
    Ok(Json(view).into_response())
}

/// Dashboard model: stats, featured innovations, recent milestones
pub async fn get_dashboard(State(state): State<AppState>) -> Response {
    let dashboard = Dashboard::build(state.catalog.as_ref(), state.dashboard_params());
    Json(dashboard).into_response()
}
