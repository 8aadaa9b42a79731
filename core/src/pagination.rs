//! Pagination resolver.
//!
//! Turns the raw `page` and `limit` query parameters into validated
//! [`PageParams`]. Absent (or empty) parameters take the defaults; supplied
//! values go through the integer validator and must be positive, so the
//! computed offset is always non-negative.

use ct_shared::types::pagination::{PageParams, DEFAULT_LIMIT, DEFAULT_PAGE};
use serde_json::json;

use crate::errors::{AppError, AppResult};
use crate::validation::parse_integer;

/// Resolve pagination parameters from raw query values.
pub fn resolve_page_params(page: Option<&str>, limit: Option<&str>) -> AppResult<PageParams> {
    let page = resolve_one(page, "page", DEFAULT_PAGE)?;
    let limit = resolve_one(limit, "limit", DEFAULT_LIMIT)?;

    // Both values are positive, but their product must also fit in i64 or
    // the offset computation would wrap.
    if (page - 1).checked_mul(limit).is_none() {
        return Err(AppError::Validation {
            message: "Parameter validation failed".to_string(),
            details: Some(json!({
                "parameter": "page",
                "reason": "page is out of range",
            })),
        });
    }

    Ok(PageParams { page, limit })
}

fn resolve_one(raw: Option<&str>, param: &str, default: i64) -> AppResult<i64> {
    // An empty query value (`?page=`) counts as absent.
    let raw = raw.map(str::trim).filter(|v| !v.is_empty());

    let value = match raw {
        None => default,
        Some(raw) => parse_integer(Some(raw), param)?,
    };

    if value < 1 {
        return Err(AppError::Validation {
            message: "Parameter validation failed".to_string(),
            details: Some(json!({
                "parameter": param,
                "reason": format!("{param} must be a positive integer"),
            })),
        });
    }

    Ok(value)
}
