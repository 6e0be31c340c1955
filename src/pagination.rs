use serde::{Deserialize, Serialize};

/// Pagination options carried on list queries.
///
/// `per_page` is optional: a page number without a size means "no offset,
/// no limit" and returns the full filtered set. Callers should treat
/// `per_page` as required in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page, 1-based.
    pub page: usize,
    /// Number of items per page, when capped.
    pub per_page: Option<usize>,
}

impl Pagination {
    /// Number of rows to skip before the requested page starts.
    pub fn offset(&self) -> usize {
        self.per_page
            .map(|per_page| (self.page.max(1) - 1) * per_page)
            .unwrap_or(0)
    }

    /// Number of rows the page is capped to, when a size was supplied.
    pub fn limit(&self) -> Option<usize> {
        self.per_page
    }
}
