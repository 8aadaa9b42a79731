//! Common wire types shared across layers

pub mod pagination;

pub use pagination::{Page, PageParams};
