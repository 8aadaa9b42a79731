//! Domain records for the catalog resources.

pub mod category;
pub mod product;
pub mod supplier;

pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product};
pub use supplier::{NewSupplier, Supplier, SupplierDetails, SupplierProducts};
