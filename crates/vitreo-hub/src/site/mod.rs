//! Server-rendered HTML site
//!
//! Filter state lives in the query string (`?category=&q=`,
//! `?significance=`), so every view is a plain GET and can be bookmarked.

pub mod handlers;
pub mod html;
pub mod layout;
pub mod pages;

use crate::api::rest::state::AppState;
use axum::{routing::get, Router};

/// Page routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/innovations", get(handlers::innovation_list))
        .route("/innovations/:id", get(handlers::innovation_detail))
        .route("/techniques", get(handlers::technique_list))
        .route("/techniques/:id", get(handlers::technique_detail))
        .route("/timeline", get(handlers::timeline_page))
        .route("/research", get(handlers::research_page))
}
