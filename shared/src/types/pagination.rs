//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Default page number when the client supplies none
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when the client supplies none
pub const DEFAULT_LIMIT: i64 = 3;

/// Resolved pagination parameters for list endpoints
///
/// Constructed by the pagination resolver in the core crate, which
/// guarantees that both `page` and `limit` are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Current page number (1-indexed)
    pub page: i64,

    /// Number of items per page
    pub limit: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Create pagination parameters without going through the resolver.
    ///
    /// Non-positive values are clamped up to 1 so the offset invariant
    /// still holds for programmatic callers.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Number of leading rows skipped before the returned page begins.
    ///
    /// Saturates at `i64::MAX` so extreme page/limit combinations can never
    /// wrap into a negative offset; the resolver rejects such requests
    /// before they reach a query.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// One page of query results together with the full filtered count
///
/// `total` reflects the complete filtered set size and is independent of
/// `limit`/`offset`; `items` holds at most `limit` rows and may be shorter
/// on the last page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of rows matching the filter
    pub total: i64,

    /// The rows of this page, in query order
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(total: i64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    /// Create an empty page
    pub fn empty() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }

    /// Number of rows actually present in this page
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// Check if the page holds no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the rows using a function
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
