//! PostgreSQL repository implementations.

mod category_repository_impl;
mod product_repository_impl;
mod supplier_repository_impl;

pub use category_repository_impl::PgCategoryRepository;
pub use product_repository_impl::PgProductRepository;
pub use supplier_repository_impl::PgSupplierRepository;
