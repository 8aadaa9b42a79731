//! Infrastructure layer for the catalog server.
//!
//! Implements the repository contracts from `ct_core` against PostgreSQL
//! using SQLx, and owns pool construction and the mapping from SQLx errors
//! into the application error taxonomy.

pub mod database;

pub use database::connection::create_pool;
pub use database::postgres::{
    PgCategoryRepository, PgProductRepository, PgSupplierRepository,
};
