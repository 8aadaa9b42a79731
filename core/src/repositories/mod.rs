//! Repository contracts consumed by the HTTP layer.
//!
//! Each resource exposes one async trait. List and search operations return
//! a [`Page`] whose `total` reflects the full filtered count independent of
//! limit/offset; id-keyed operations return `Option` so that "absent" is an
//! explicit signal distinct from an empty list — translating absence into a
//! 404 is the handler's job, never the repository's.
//!
//! [`Page`]: ct_shared::types::pagination::Page

pub mod categories;
pub mod mock;
pub mod products;
pub mod suppliers;

pub use categories::CategoryRepository;
pub use products::ProductRepository;
pub use suppliers::SupplierRepository;
