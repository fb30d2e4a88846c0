use async_trait::async_trait;
use bank_system_db::models::BankAccountDetailsModel;
use bank_system_db::repository::load_page::LoadPage;
use bank_system_db::repository::pagination::PageRequest;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BankAccountRepositoryImpl;

impl BankAccountRepositoryImpl {
    pub(super) async fn load_page_impl(
        repo: &BankAccountRepositoryImpl,
        page: PageRequest,
    ) -> Result<Vec<BankAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        if page.limit == 0 {
            return Ok(Vec::new());
        }

        let (limit, offset) = page.as_i64();
        let query = r#"
            SELECT a.id, a.name, a.unique_id, a.balance, a.created_on, a.user_id,
                   u.full_name AS user_full_name
            FROM bank_account a
            JOIN bank_user u ON u.id = a.user_id
            ORDER BY a.created_on DESC, a.id
            LIMIT $1 OFFSET $2
        "#;
        let rows = sqlx::query(query)
            .bind(limit)
            .bind(offset)
            .fetch_all(repo.pool.as_ref())
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(BankAccountDetailsModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl LoadPage<Postgres, BankAccountDetailsModel> for BankAccountRepositoryImpl {
    async fn load_page(&self, page: PageRequest) -> Result<Vec<BankAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        Self::load_page_impl(self, page).await
    }
}
