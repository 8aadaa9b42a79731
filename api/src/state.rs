//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use ct_core::repositories::{CategoryRepository, ProductRepository, SupplierRepository};
use ct_infra::{PgCategoryRepository, PgProductRepository, PgSupplierRepository};

/// Repository handles injected into every handler.
///
/// Handlers only see the trait objects, so tests swap in the in-memory
/// mocks without touching the routing table.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        suppliers: Arc<dyn SupplierRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            suppliers,
            categories,
        }
    }

    /// Wire all repositories to a PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgProductRepository::new(pool.clone())),
            Arc::new(PgSupplierRepository::new(pool.clone())),
            Arc::new(PgCategoryRepository::new(pool)),
        )
    }
}
