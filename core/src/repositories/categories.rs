//! Category repository contract.

use async_trait::async_trait;

use ct_shared::types::pagination::{Page, PageParams};

use crate::domain::{Category, NewCategory};
use crate::errors::AppResult;

/// Persistence operations for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by id, one page at a time
    async fn list(&self, params: PageParams) -> AppResult<Page<Category>>;

    /// Case-insensitive substring search on the category name
    async fn search_by_name(&self, needle: &str, params: PageParams)
        -> AppResult<Page<Category>>;

    /// Single category by id; `None` when it does not exist
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>>;

    /// Insert a category and return the stored row
    async fn create(&self, new: NewCategory) -> AppResult<Category>;

    /// Replace the updatable fields; `None` when the id does not exist
    async fn update(&self, id: i64, update: NewCategory) -> AppResult<Option<Category>>;

    /// Delete the category, returning the deleted row
    async fn delete(&self, id: i64) -> AppResult<Option<Category>>;
}
