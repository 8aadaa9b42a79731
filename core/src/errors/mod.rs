//! Application error taxonomy.
//!
//! A single closed sum type covers every failure the request pipeline can
//! produce. The HTTP status is fixed by the variant at construction time;
//! the translator in the API layer renders the variants into the wire
//! envelope and never needs to inspect anything beyond this type.

mod db_codes;

pub use db_codes::{
    violation_message, CHECK_VIOLATION, FOREIGN_KEY_VIOLATION, NOT_NULL_VIOLATION,
    UNIQUE_VIOLATION, UNKNOWN_DB_ERROR_MESSAGE,
};

use serde_json::Value;
use thiserror::Error;

/// Store-reported failure carried out of the persistence layer.
///
/// `code` is the SQLSTATE of a constraint violation when the store reported
/// one; transport-level failures (pool exhaustion, broken connections)
/// surface without a code and fall through to the generic branch of the
/// translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseError {
    /// SQLSTATE violation code, e.g. "23505"
    pub code: Option<String>,

    /// Native message reported by the store
    pub message: String,

    /// Name of the violated constraint, when known
    pub constraint: Option<String>,
}

/// Application errors with fixed HTTP status codes
#[derive(Error, Debug)]
pub enum AppError {
    /// Input failed a field validator (400)
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    /// Caller is not authenticated (401)
    #[error("{message}")]
    Auth {
        message: String,
        details: Option<Value>,
    },

    /// The addressed resource does not exist (404)
    #[error("{message}")]
    NotFound { message: String },

    /// The store rejected an operation (500, SQLSTATE preserved)
    #[error("database error: {}", .0.message)]
    Database(DatabaseError),

    /// Anything else (500)
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    /// HTTP status code fixed by the variant
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation { .. } => 400,
            AppError::Auth { .. } => 401,
            AppError::NotFound { .. } => 404,
            AppError::Database(_) => 500,
            AppError::Internal { .. } => 500,
        }
    }

    /// Structured details attached to the error, if any
    pub fn details(&self) -> Option<&Value> {
        match self {
            AppError::Validation { details, .. } | AppError::Auth { details, .. } => {
                details.as_ref()
            }
            _ => None,
        }
    }

    /// Create a validation error without details
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
