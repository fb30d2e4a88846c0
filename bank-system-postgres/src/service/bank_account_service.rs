use async_trait::async_trait;
use bank_system_api::domain::BankAccountDetails;
use bank_system_api::error::{ApiError, ApiResult};
use bank_system_api::service::BankAccountService;
use bank_system_db::models::{BankAccountDetailsModel, BankAccountModel};
use bank_system_db::repository::count_all::CountAll;
use bank_system_db::repository::load_page::LoadPage;
use bank_system_db::repository::pagination::PageRequest;
use sqlx::Postgres;
use std::sync::Arc;

/// [`BankAccountService`] backed by a bank account repository
pub struct BankAccountServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> BankAccountServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> BankAccountService for BankAccountServiceImpl<R>
where
    R: LoadPage<Postgres, BankAccountDetailsModel> + CountAll<Postgres, BankAccountModel> + 'static,
{
    async fn get_accounts(&self, page_index: usize, count: usize) -> ApiResult<Vec<BankAccountDetails>> {
        let page = PageRequest::for_page(count, page_index);
        tracing::debug!(limit = page.limit, offset = page.offset, "Loading bank accounts page");

        let models = self
            .repository
            .load_page(page)
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(BankAccountDetails::from).collect())
    }

    async fn get_count_of_accounts(&self) -> ApiResult<usize> {
        self.repository
            .count_all()
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))
    }
}
