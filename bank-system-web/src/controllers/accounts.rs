use bank_system_api::config::AccountListingConfig;
use bank_system_api::error::ApiResult;
use bank_system_api::service::BankAccountService;
use std::sync::Arc;

use crate::infrastructure::paginated_list::page_count;
use crate::infrastructure::PaginatedList;
use crate::models::{AllBankAccountsListViewModel, BankAccountListingViewModel};
use crate::render::{RequestContext, ViewRenderer};

pub const ACCOUNTS_INDEX_VIEW: &str = "Administration/Accounts/Index";

/// Administrative listing of every bank account
///
/// Callers are expected to be authorized administrators.
pub struct AccountsController {
    bank_account_service: Arc<dyn BankAccountService>,
    config: AccountListingConfig,
}

impl AccountsController {
    pub fn new(bank_account_service: Arc<dyn BankAccountService>, config: AccountListingConfig) -> Self {
        Self {
            bank_account_service,
            config,
        }
    }

    /// Fetch the requested page of accounts together with the total count
    ///
    /// A missing or non-positive `page_index` means the first page. A page
    /// past the end is served as the last page.
    pub async fn list_accounts(
        &self,
        page_index: Option<i64>,
    ) -> ApiResult<PaginatedList<BankAccountListingViewModel>> {
        let page_index = page_index.unwrap_or(1).max(1);
        let page_size = self.config.accounts_per_page;
        let requested_page = usize::try_from(page_index).unwrap_or(usize::MAX);

        let (mut accounts, total_count) = tokio::try_join!(
            self.bank_account_service.get_accounts(requested_page, page_size),
            self.bank_account_service.get_count_of_accounts(),
        )?;

        let total_pages = page_count(total_count, page_size);
        if total_pages >= 1 && requested_page > total_pages {
            tracing::debug!(requested_page, total_pages, "Requested page past the end, serving last page");
            accounts = self
                .bank_account_service
                .get_accounts(total_pages, page_size)
                .await?;
        }

        let accounts: Vec<BankAccountListingViewModel> = accounts
            .into_iter()
            .map(BankAccountListingViewModel::from)
            .collect();

        let page = PaginatedList::from_fetched_page(
            accounts,
            total_count,
            page_index,
            page_size,
            self.config.surrounding_pages_count,
        );
        tracing::debug!(
            current_page = page.current_page(),
            total_pages = page.total_pages(),
            shown = page.len(),
            "Listed bank accounts"
        );
        Ok(page)
    }

    /// Render the listing page; nothing is rendered when a read fails
    pub async fn index<R>(&self, page_index: Option<i64>, renderer: &R, ctx: &RequestContext) -> ApiResult<R::Output>
    where
        R: ViewRenderer<AllBankAccountsListViewModel>,
    {
        let bank_accounts = match self.list_accounts(page_index).await {
            Ok(bank_accounts) => bank_accounts,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list bank accounts");
                return Err(e);
            }
        };

        let model = AllBankAccountsListViewModel { bank_accounts };
        renderer.render(ACCOUNTS_INDEX_VIEW, &model, ctx)
    }
}
