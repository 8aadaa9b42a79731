//! Shared utilities and common types for the catalog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination wire types

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use types::{Page, PageParams};
