//! API request handlers

mod health;
mod innovations;
mod techniques;
mod timeline;

pub use health::*;
pub use innovations::*;
pub use techniques::*;
pub use timeline::*;

use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for unknown API paths
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
