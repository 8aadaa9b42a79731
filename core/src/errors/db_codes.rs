//! Static mapping from store constraint-violation codes to messages.
//!
//! The four SQLSTATE codes the catalog schema can produce are mapped to
//! canonical human-readable messages. The table is initialized once per
//! process and never mutated; lookup of an unmapped code falls back to a
//! generic message. This is the only database-aware piece of the taxonomy:
//! it knows codes and messages, not SQL.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Insert or update referenced a missing row
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// A unique constraint was violated
pub const UNIQUE_VIOLATION: &str = "23505";
/// A NOT NULL column received null
pub const NOT_NULL_VIOLATION: &str = "23502";
/// A CHECK constraint rejected the row
pub const CHECK_VIOLATION: &str = "23514";

/// Fallback message for codes outside the table
pub const UNKNOWN_DB_ERROR_MESSAGE: &str = "unknown database error";

static VIOLATION_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            FOREIGN_KEY_VIOLATION,
            "Insert or update on table violates foreign key constraint",
        ),
        (
            UNIQUE_VIOLATION,
            "duplicate key value violates unique constraint",
        ),
        (
            NOT_NULL_VIOLATION,
            "null value violates not-null constraint",
        ),
        (
            CHECK_VIOLATION,
            "New row for relation violates check constraint",
        ),
    ])
});

/// Canonical message for a store violation code
pub fn violation_message(code: &str) -> &'static str {
    VIOLATION_MESSAGES
        .get(code)
        .copied()
        .unwrap_or(UNKNOWN_DB_ERROR_MESSAGE)
}
