//! Route handlers, grouped per resource.

pub mod categories;
pub mod health;
pub mod products;
pub mod suppliers;
