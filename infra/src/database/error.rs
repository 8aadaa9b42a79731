//! Mapping from SQLx failures into the application error taxonomy.

use ct_core::errors::{AppError, DatabaseError};

/// Convert a SQLx error into an [`AppError`].
///
/// Errors reported by the store itself keep their SQLSTATE and constraint
/// name so the boundary translator can render the canonical message;
/// transport failures (pool exhaustion, closed connections) become plain
/// internal errors.
pub fn map_db_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db) => AppError::Database(DatabaseError {
            code: db.code().map(|c| c.to_string()),
            message: db.message().to_string(),
            constraint: db.constraint().map(|c| c.to_string()),
        }),
        sqlx::Error::PoolTimedOut => {
            AppError::internal("timed out waiting for a database connection")
        }
        other => AppError::internal(format!("database failure: {other}")),
    }
}
