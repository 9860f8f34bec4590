//! Error types for vitreo-hub

use crate::site::layout::DEFAULT_SITE_TITLE;
use crate::site::pages::status;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vitreo_types::ParseError;

/// Hub-level errors
#[derive(Debug, Error)]
pub enum HubError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for HubError {
    fn from(err: config::ConfigError) -> Self {
        HubError::Config(err.to_string())
    }
}

/// JSON API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "API request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// HTML page errors
#[derive(Debug, Error)]
pub enum PageError {
    /// Unknown record id or path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unparseable tab or filter value
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything the page could not recover from
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParseError> for PageError {
    fn from(err: ParseError) -> Self {
        PageError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for PageError {
    fn from(rejection: QueryRejection) -> Self {
        PageError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PageError::NotFound(_) => {
                (StatusCode::NOT_FOUND, status::not_found(DEFAULT_SITE_TITLE))
            }
            PageError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                status::bad_request(DEFAULT_SITE_TITLE, message),
            ),
            PageError::Internal(message) => {
                tracing::error!(error = %message, "Page rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    status::something_went_wrong(DEFAULT_SITE_TITLE),
                )
            }
        };

        (status, Html(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for page handlers
pub type PageResult<T> = Result<T, PageError>;

/// Result type alias for hub operations
pub type HubResult<T> = Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::NotFound("test".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("test".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_errors_are_bad_requests() {
        let err: ApiError = ParseError::UnknownCategory("lasers".into()).into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("lasers")));

        let err: PageError = ParseError::UnknownSignificance("minor".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_page_error_status_codes() {
        assert_eq!(
            PageError::NotFound("/innovations/x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PageError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
