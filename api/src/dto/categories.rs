//! Category request payload and list envelope.

use serde::{Deserialize, Serialize};

use ct_core::domain::Category;
use ct_shared::types::pagination::Page;

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    pub total_categories: i64,
    pub categories_shown: usize,
    pub page: i64,
    pub categories: Vec<Category>,
}

impl CategoryListResponse {
    pub fn new(page: i64, result: Page<Category>) -> Self {
        Self {
            total_categories: result.total,
            categories_shown: result.shown(),
            page,
            categories: result.items,
        }
    }
}
