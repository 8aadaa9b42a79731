//! Product records.

use serde::{Deserialize, Serialize};

/// Product row as served to clients.
///
/// `category` and `supplier` carry the joined names rather than the foreign
/// keys; a product may exist without a category but never without a
/// supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub stock_quantity: i64,
    pub price: i64,
    pub category: Option<String>,
    pub supplier: String,
}

/// Fields accepted when creating or fully updating a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub stock_quantity: i64,
    pub price: i64,
    pub category_id: i64,
    pub supplier_id: i64,
}
