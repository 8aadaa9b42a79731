//! Product repository contract.

use async_trait::async_trait;

use ct_shared::types::pagination::{Page, PageParams};

use crate::domain::{NewProduct, Product};
use crate::errors::AppResult;

/// Persistence operations for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id, one page at a time
    async fn list(&self, params: PageParams) -> AppResult<Page<Product>>;

    /// Case-insensitive substring search on the product name
    async fn search_by_name(&self, needle: &str, params: PageParams) -> AppResult<Page<Product>>;

    /// Single product by id; `None` when it does not exist
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Insert a product and return the stored row
    async fn create(&self, new: NewProduct) -> AppResult<Product>;

    /// Replace every updatable field; `None` when the id does not exist
    async fn update(&self, id: i64, update: NewProduct) -> AppResult<Option<Product>>;

    /// Update only the name
    async fn update_name(&self, id: i64, name: &str) -> AppResult<Option<Product>>;

    /// Update only the stock quantity
    async fn update_stock_quantity(
        &self,
        id: i64,
        stock_quantity: i64,
    ) -> AppResult<Option<Product>>;

    /// Delete the product, returning the deleted row
    async fn delete(&self, id: i64) -> AppResult<Option<Product>>;
}
