//! # Catalog API
//!
//! HTTP layer for the catalog server: actix-web routes, request/response
//! DTOs, error translation to the wire envelopes and the middleware stack.

pub mod app;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
