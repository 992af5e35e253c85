//! Pagination types for list queries.
//!
//! The public listing contract is offset-based: callers pass `from` (index
//! of the first element) and `size` (page length). Storage works in whole
//! pages, so `from` is snapped to its containing page via integer division.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
///
/// `from` values that are not exact multiples of `size` snap to the start
/// of the containing page. This is the documented behavior of the listing
/// contract, not a rounding bug.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Index of the first element the caller wants.
    pub from: i64,
    /// Number of items per page.
    pub size: i64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(from: i64, size: i64) -> Self {
        Self { from, size }
    }

    /// Whether the parameters satisfy `from >= 0 && size > 0`.
    pub fn is_valid(&self) -> bool {
        self.from >= 0 && self.size > 0
    }

    /// Zero-based page number containing `from`.
    pub fn page(&self) -> i64 {
        self.from / self.size
    }

    /// Calculate the SQL `OFFSET` value (start of the containing page).
    pub fn offset(&self) -> i64 {
        self.page() * self.size
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.size
    }
}
