//! Supplier records.

use serde::{Deserialize, Serialize};

use ct_shared::types::pagination::Page;

use super::product::Product;

/// Supplier row as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: i64,
    pub name: String,
    pub contact_person_firstname: String,
    pub contact_person_secondname: String,
    pub email: String,
    pub phonenumber: String,
    pub country: String,
}

/// Single-supplier projection with its product count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDetails {
    #[serde(flatten)]
    pub supplier: Supplier,
    pub product_count: i64,
}

/// One page of a supplier's products, plus the supplier's name.
///
/// `supplier` is `None` when the page is empty and the name could not be
/// derived from any row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierProducts {
    pub supplier: Option<String>,
    pub products: Page<Product>,
}

/// Fields accepted when creating or fully updating a supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person_firstname: String,
    pub contact_person_secondname: String,
    pub email: String,
    pub phonenumber: String,
    pub country: String,
}
