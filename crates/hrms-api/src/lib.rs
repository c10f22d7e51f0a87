//! # HRMS API
//!
//! HTTP handlers, routing, and the response envelope.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::api_router;
pub use state::AppState;
