use async_trait::async_trait;
use bank_system_db::models::BankUserModel;
use bank_system_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BankUserRepositoryImpl;

impl BankUserRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &BankUserRepositoryImpl,
        items: Vec<BankUserModel>,
    ) -> Result<Vec<BankUserModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut transaction = repo.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO bank_user (id, email, full_name, created_on)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(item.id)
            .bind(item.email.as_str())
            .bind(item.full_name.as_str())
            .bind(item.created_on)
            .execute(&mut *transaction)
            .await?;
        }
        transaction.commit().await?;

        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, BankUserModel> for BankUserRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<BankUserModel>,
    ) -> Result<Vec<BankUserModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
