//! Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use crate::error::PageError;
use crate::site;
use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the main router: HTML pages at the root, JSON under `/api/v1`
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let mut api_routes = Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Innovations
        .route("/innovations", get(handlers::list_innovations))
        .route("/innovations/:id", get(handlers::get_innovation))
        // Techniques
        .route("/techniques", get(handlers::list_techniques))
        .route("/techniques/:id", get(handlers::get_technique))
        // Derived views
        .route("/timeline", get(handlers::get_timeline))
        .route("/dashboard", get(handlers::get_dashboard))
        .fallback(handlers::api_not_found);

    if server.enable_cors {
        api_routes = api_routes.layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        );
    }

    // Build router with middleware
    Router::new()
        .merge(site::routes())
        .nest("/api/v1", api_routes)
        .fallback(site::handlers::not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Render the generic error page when a handler panics
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    PageError::Internal(detail).into_response()
}
