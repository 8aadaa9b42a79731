//! Supplier request payloads and list envelopes.

use serde::{Deserialize, Serialize};

use ct_core::domain::{Product, Supplier, SupplierProducts};
use ct_shared::types::pagination::Page;

#[derive(Debug, Deserialize)]
pub struct SupplierPayload {
    pub name: Option<String>,
    pub contact_person_firstname: Option<String>,
    pub contact_person_secondname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupplierNamePayload {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupplierCountryPayload {
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierListResponse {
    pub total_suppliers: i64,
    pub suppliers_shown: usize,
    pub page: i64,
    pub suppliers: Vec<Supplier>,
}

impl SupplierListResponse {
    pub fn new(page: i64, result: Page<Supplier>) -> Self {
        Self {
            total_suppliers: result.total,
            suppliers_shown: result.shown(),
            page,
            suppliers: result.items,
        }
    }
}

/// Page of one supplier's products, headed by the supplier name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProductsResponse {
    pub supplier: Option<String>,
    pub total_products: i64,
    pub products_shown: usize,
    pub page: i64,
    pub products: Vec<Product>,
}

impl SupplierProductsResponse {
    pub fn new(page: i64, result: SupplierProducts) -> Self {
        Self {
            supplier: result.supplier,
            total_products: result.products.total,
            products_shown: result.products.shown(),
            page,
            products: result.products.items,
        }
    }
}
