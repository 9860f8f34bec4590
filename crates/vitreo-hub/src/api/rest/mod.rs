//! REST API and router

pub mod handlers;
pub mod params;
pub mod router;
pub mod state;
