//! Request and response shapes for the HTTP surface.
//!
//! Request bodies deserialize every field as `Option` so that absence
//! reaches the field validators instead of being rejected by serde with an
//! envelope the clients do not know. Query parameters stay raw strings for
//! the same reason; the pagination resolver owns their parsing.

pub mod categories;
pub mod products;
pub mod suppliers;

use serde::Deserialize;

/// Raw pagination query values, resolved by the core resolver.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Name filter plus pagination, as used by the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}
