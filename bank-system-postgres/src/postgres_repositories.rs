use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::bank_account_repository::BankAccountRepositoryImpl;
use crate::repository::bank_user_repository::BankUserRepositoryImpl;
use crate::service::BankAccountServiceImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create all repositories sharing the connection pool
    pub fn create_repositories(&self) -> BankRepositories {
        BankRepositories {
            bank_account_repository: Arc::new(BankAccountRepositoryImpl::new(self.pool.clone())),
            bank_user_repository: Arc::new(BankUserRepositoryImpl::new(self.pool.clone())),
        }
    }

    /// Account service over a fresh bank account repository
    pub fn create_bank_account_service(&self) -> Arc<BankAccountServiceImpl<BankAccountRepositoryImpl>> {
        let repository = Arc::new(BankAccountRepositoryImpl::new(self.pool.clone()));
        Arc::new(BankAccountServiceImpl::new(repository))
    }
}

pub struct BankRepositories {
    pub bank_account_repository: Arc<BankAccountRepositoryImpl>,
    pub bank_user_repository: Arc<BankUserRepositoryImpl>,
}
