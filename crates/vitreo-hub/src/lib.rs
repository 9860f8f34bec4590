//! Vitreo Hub library
//!
//! HTTP shell around the vitreoretinal reference catalog:
//! - Server-rendered HTML pages
//! - JSON API under `/api/v1`
//! - Configuration and server lifecycle

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod site;

pub use api::create_router;
pub use api::rest::state::AppState;
pub use config::HubConfig;
pub use error::{ApiError, HubError, HubResult, PageError};
pub use server::Server;
