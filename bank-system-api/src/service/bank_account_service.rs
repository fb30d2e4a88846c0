use async_trait::async_trait;

use crate::domain::BankAccountDetails;
use crate::error::ApiResult;

/// Read access to bank accounts for administrative listings
///
/// Implementations must apply the same ordering and filtering to both
/// operations so that a page and the total count describe the same result set.
#[async_trait]
pub trait BankAccountService: Send + Sync {
    /// Load one page of accounts
    ///
    /// # Arguments
    /// * `page_index` - 1-based page number
    /// * `count` - Number of accounts per page
    async fn get_accounts(&self, page_index: usize, count: usize) -> ApiResult<Vec<BankAccountDetails>>;

    /// Total number of accounts across all pages
    async fn get_count_of_accounts(&self) -> ApiResult<usize>;
}
