//! HTTP middleware.

pub mod cors;
pub mod request_log;

pub use cors::create_cors;
pub use request_log::RequestLog;
