use async_trait::async_trait;
use bank_system_db::models::BankAccountModel;
use bank_system_db::repository::count_all::CountAll;
use crate::utils::count_to_usize;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BankAccountRepositoryImpl;

impl BankAccountRepositoryImpl {
    pub(super) async fn count_all_impl(
        repo: &BankAccountRepositoryImpl,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        // Same join as load_page so that both see the same accounts
        let query = r#"
            SELECT COUNT(*)
            FROM bank_account a
            JOIN bank_user u ON u.id = a.user_id
        "#;
        let count: i64 = sqlx::query_scalar(query)
            .fetch_one(repo.pool.as_ref())
            .await?;
        count_to_usize(count)
    }
}

#[async_trait]
impl CountAll<Postgres, BankAccountModel> for BankAccountRepositoryImpl {
    async fn count_all(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::count_all_impl(self).await
    }
}
