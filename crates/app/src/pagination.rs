//! Pagination

use thiserror::Error;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page numbers start at 1")]
    InvalidPage,

    #[error("limit must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidLimit,
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Build a page request, falling back to the first page and the default size.
    ///
    /// # Errors
    ///
    /// Returns an error when `page` is zero or `limit` is outside `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Result<Self, PaginationError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }

        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(PaginationError::InvalidLimit);
        }

        Ok(Self { page, limit })
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Row offset of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self { count, results }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    /// Number of the following page, if it has any rows.
    #[must_use]
    pub fn next_page(&self, pagination: Pagination) -> Option<u32> {
        let seen = u64::from(pagination.page) * u64::from(pagination.limit);

        (seen < self.count).then(|| pagination.page + 1)
    }

    /// Number of the preceding page, if there is one.
    #[must_use]
    pub fn previous_page(&self, pagination: Pagination) -> Option<u32> {
        (pagination.page > 1).then(|| pagination.page - 1)
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
