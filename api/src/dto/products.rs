//! Product request payloads and list envelope.

use serde::{Deserialize, Serialize};

use ct_core::domain::Product;
use ct_shared::types::pagination::Page;

#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub stock_quantity: Option<i64>,
    pub price: Option<i64>,
    pub category_id: Option<i64>,
    pub supplier_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ProductNamePayload {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductStockPayload {
    pub stock_quantity: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub total_products: i64,
    pub products_shown: usize,
    pub page: i64,
    pub products: Vec<Product>,
}

impl ProductListResponse {
    pub fn new(page: i64, result: Page<Product>) -> Self {
        Self {
            total_products: result.total,
            products_shown: result.shown(),
            page,
            products: result.items,
        }
    }
}
