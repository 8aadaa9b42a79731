//! Field validators.
//!
//! Pure functions that check one raw input value against a type and format
//! rule. On success they return the normalized value; on failure they
//! return a `Validation` error naming the offending parameter and the
//! reason. They never coerce silently and never perform I/O.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::errors::{AppError, AppResult};

// Unicode letters (accented variants included), spaces and hyphens.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s\-]+$").unwrap());

// local-part@domain.tld, no embedded whitespace.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Leading +, 6-15 digit/separator groups, ending in a digit.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+(?:[0-9\-()/.]\s?){6,15}[0-9]$").unwrap());

fn param_failure(param: &str, reason: String) -> AppError {
    AppError::Validation {
        message: "Parameter validation failed".to_string(),
        details: Some(json!({ "parameter": param, "reason": reason })),
    }
}

fn format_failure(message: &str, param: &str, reason: String) -> AppError {
    AppError::Validation {
        message: message.to_string(),
        details: Some(json!({ "parameter": param, "reason": reason })),
    }
}

/// Parse a string-carried value as a base-10 integer.
///
/// An absent value fails with a "not filled in" reason, a non-numeric one
/// with a "not a number" reason. `0` is a valid result; callers must never
/// treat the parsed value as a presence flag.
pub fn parse_integer(value: Option<&str>, param: &str) -> AppResult<i64> {
    let raw = match value {
        Some(raw) => raw.trim(),
        None => return Err(param_failure(param, format!("{param} is not filled in"))),
    };

    raw.parse::<i64>()
        .map_err(|_| param_failure(param, format!("{raw} is not a number")))
}

/// Require an integer field that arrived already typed (JSON body).
///
/// Only presence needs checking here; the deserializer has done the type
/// work. Zero passes.
pub fn require_integer(value: Option<i64>, param: &str) -> AppResult<i64> {
    value.ok_or_else(|| param_failure(param, format!("{param} is not filled in")))
}

/// Validate a constrained string: non-empty after trimming and made up of
/// letters, spaces and hyphens only. Returns the value unchanged.
pub fn validate_name(value: Option<&str>, param: &str) -> AppResult<String> {
    let raw = match value {
        Some(raw) => raw,
        None => return Err(param_failure(param, format!("{param} is not filled in"))),
    };

    if raw.trim().is_empty() {
        return Err(param_failure(param, format!("{param} is not filled in")));
    }

    if !NAME_REGEX.is_match(raw) {
        return Err(format_failure(
            "Invalid string",
            param,
            format!("{param} may only contain letters, spaces and hyphens"),
        ));
    }

    Ok(raw.to_string())
}

/// Validate an email address of the shape `local-part@domain.tld`.
pub fn validate_email(value: Option<&str>, param: &str) -> AppResult<String> {
    let raw = match value {
        Some(raw) => raw,
        None => return Err(param_failure(param, format!("{param} is not filled in"))),
    };

    if raw.trim().is_empty() {
        return Err(param_failure(param, format!("{param} is not filled in")));
    }

    if !EMAIL_REGEX.is_match(raw) {
        return Err(format_failure(
            "Invalid email format",
            param,
            format!("{param} must be a valid email address"),
        ));
    }

    Ok(raw.to_string())
}

/// Validate an international phone number: a leading `+`, 6-15 digit or
/// separator groups, ending in a digit.
pub fn validate_phone(value: Option<&str>, param: &str) -> AppResult<String> {
    let raw = match value {
        Some(raw) => raw,
        None => return Err(param_failure(param, format!("{param} is not filled in"))),
    };

    if raw.trim().is_empty() {
        return Err(param_failure(param, format!("{param} is not filled in")));
    }

    if !PHONE_REGEX.is_match(raw) {
        return Err(format_failure(
            "Invalid phone number format",
            param,
            format!("{param} must be an international phone number starting with +"),
        ));
    }

    Ok(raw.to_string())
}
