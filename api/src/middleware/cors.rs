//! CORS policy.

use actix_cors::Cors;

/// Permissive policy: the API is read-heavy and unauthenticated, so any
/// origin may call it.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
