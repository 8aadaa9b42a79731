//! Supplier repository contract.

use async_trait::async_trait;

use ct_shared::types::pagination::{Page, PageParams};

use crate::domain::{NewSupplier, Supplier, SupplierDetails, SupplierProducts};
use crate::errors::AppResult;

/// Persistence operations for suppliers
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// All suppliers, ordered by id, one page at a time
    async fn list(&self, params: PageParams) -> AppResult<Page<Supplier>>;

    /// Case-insensitive substring search on the supplier name
    async fn search_by_name(&self, needle: &str, params: PageParams)
        -> AppResult<Page<Supplier>>;

    /// Single supplier by id joined with its product count
    async fn find_by_id(&self, id: i64) -> AppResult<Option<SupplierDetails>>;

    /// Insert a supplier and return the stored row
    async fn create(&self, new: NewSupplier) -> AppResult<Supplier>;

    /// Replace every updatable field; `None` when the id does not exist
    async fn update(&self, id: i64, update: NewSupplier) -> AppResult<Option<Supplier>>;

    /// Update only the name
    async fn update_name(&self, id: i64, name: &str) -> AppResult<Option<Supplier>>;

    /// Update only the country
    async fn update_country(&self, id: i64, country: &str) -> AppResult<Option<Supplier>>;

    /// Delete the supplier, returning the deleted row
    async fn delete(&self, id: i64) -> AppResult<Option<Supplier>>;

    /// One page of a supplier's products plus the supplier's name
    async fn products(&self, id: i64, params: PageParams) -> AppResult<SupplierProducts>;
}
