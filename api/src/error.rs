//! Error translation to the HTTP wire format.
//!
//! `ApiError` wraps the domain error taxonomy and implements
//! `ResponseError`, which is the single point where failures become
//! response bodies. Handlers return `Result<HttpResponse, ApiError>` and
//! bail out with `?`; nothing in the routing layer builds an error body by
//! hand.
//!
//! Two envelope shapes exist:
//!
//! * store violations: `{ statusCode, errorCode, message }` where
//!   `errorCode` is the SQLSTATE and `message` the canonical text for it;
//! * everything else: `{ statusCode, message }` plus `details` when the
//!   error carries structured context (validation failures do).
//!
//! Native store messages and constraint names are logged, never sent.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use ct_core::errors::{violation_message, AppError};

/// Newtype over [`AppError`] carrying the `ResponseError` impl.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match &self.0 {
            // A store violation with a SQLSTATE renders the canonical
            // message for that code; the native text stays in the log.
            AppError::Database(db) if db.code.is_some() => {
                let code = db.code.as_deref().unwrap_or_default();
                tracing::error!(
                    sqlstate = code,
                    constraint = db.constraint.as_deref().unwrap_or("unknown"),
                    native = %db.message,
                    "store rejected the operation"
                );
                HttpResponse::build(status).json(json!({
                    "statusCode": status.as_u16(),
                    "errorCode": code,
                    "message": violation_message(code),
                }))
            }
            other => {
                if status.is_server_error() {
                    tracing::error!(status = status.as_u16(), error = %other, "request failed");
                }
                let mut body = json!({
                    "statusCode": status.as_u16(),
                    "message": other.to_string(),
                });
                if let Some(details) = other.details() {
                    body["details"] = details.clone();
                }
                HttpResponse::build(status).json(body)
            }
        }
    }
}
