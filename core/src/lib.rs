//! # Catalog Core
//!
//! Domain layer for the catalog server. This crate contains the error
//! taxonomy, field validators, the pagination resolver, domain records and
//! the repository contracts that the HTTP and infrastructure layers build
//! on.

pub mod domain;
pub mod errors;
pub mod pagination;
pub mod repositories;
pub mod validation;

// Re-export commonly used types for convenience
pub use errors::{AppError, AppResult, DatabaseError};
pub use pagination::resolve_page_params;
