use bank_system_api::config::DEFAULT_ACCOUNTS_PER_PAGE;

/// Offset-based window over an ordered result set, as sent to storage
///
/// # Example
/// ```
/// use bank_system_db::repository::pagination::PageRequest;
///
/// let first_page = PageRequest::new(20, 0);
/// let second_page = PageRequest::new(20, 20);
/// assert_eq!(second_page.page_number(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// Page numbers below 1 are treated as 1.
    ///
    /// # Example
    /// ```
    /// use bank_system_db::repository::pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::for_page(20, 1).offset, 0);
    /// assert_eq!(PageRequest::for_page(20, 3).offset, 40);
    /// assert_eq!(PageRequest::for_page(20, 0).offset, 0);
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1).saturating_mul(page_size),
        }
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// `limit` and `offset` as the signed integers PostgreSQL expects
    pub fn as_i64(&self) -> (i64, i64) {
        (
            i64::try_from(self.limit).unwrap_or(i64::MAX),
            i64::try_from(self.offset).unwrap_or(i64::MAX),
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ACCOUNTS_PER_PAGE,
            offset: 0,
        }
    }
}
