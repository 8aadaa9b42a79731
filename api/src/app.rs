//! Application wiring shared by the binary and the integration tests.

use actix_web::{web, HttpResponse};
use serde_json::json;

use ct_core::errors::AppError;

use crate::error::ApiError;
use crate::routes;

/// Mount every resource scope plus the health endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    routes::health::configure(cfg);
    routes::products::configure(cfg);
    routes::suppliers::configure(cfg);
    routes::categories::configure(cfg);
}

/// JSON extractor configuration: malformed bodies are rendered through the
/// same translator as every other validation failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError(AppError::Validation {
            message: "Invalid request body".to_string(),
            details: Some(json!({ "reason": err.to_string() })),
        })
        .into()
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "statusCode": 404,
        "message": "The requested resource was not found",
    }))
}
