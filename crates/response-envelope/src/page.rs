//! Pagination payload for successful list responses.

use serde::{Deserialize, Serialize};

/// One page of results plus the metadata a client needs to fetch the rest.
///
/// The values are stored exactly as supplied. `content` is expected to be
/// already sliced by the caller, so its length is not checked against
/// `limit`, and `total` is not checked against either.
///
/// # Examples
/// ```
/// use response_envelope::Page;
///
/// let page = Page::new(1, 100, 1453, ["Refactoring", "PoEAA"]);
/// assert_eq!(page.total(), 1453);
/// assert_eq!(page.content(), &["Refactoring", "PoEAA"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page<E> {
    page: i32,
    limit: i32,
    total: i32,
    content: Vec<E>,
}

impl<E> Page<E> {
    /// Create a page, keeping `content` in iteration order.
    pub fn new(page: i32, limit: i32, total: i32, content: impl IntoIterator<Item = E>) -> Self {
        Self {
            page,
            limit,
            total,
            content: content.into_iter().collect(),
        }
    }

    /// Current page index as supplied by the caller.
    #[must_use]
    pub const fn page(&self) -> i32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn limit(&self) -> i32 {
        self.limit
    }

    /// Total item count across all pages.
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.total
    }

    /// Items on this page.
    #[must_use]
    pub fn content(&self) -> &[E] {
        &self.content
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_content(self) -> Vec<E> {
        self.content
    }
}
