use async_trait::async_trait;
use bank_system_db::models::BankAccountModel;
use bank_system_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BankAccountRepositoryImpl;

impl BankAccountRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &BankAccountRepositoryImpl,
        items: Vec<BankAccountModel>,
    ) -> Result<Vec<BankAccountModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut transaction = repo.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO bank_account (id, name, unique_id, balance, created_on, user_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.unique_id.as_str())
            .bind(item.balance)
            .bind(item.created_on)
            .bind(item.user_id)
            .execute(&mut *transaction)
            .await?;
        }
        transaction.commit().await?;

        tracing::debug!(count = items.len(), "Created bank accounts");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, BankAccountModel> for BankAccountRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<BankAccountModel>,
    ) -> Result<Vec<BankAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
