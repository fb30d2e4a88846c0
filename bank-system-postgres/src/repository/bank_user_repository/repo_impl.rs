use sqlx::PgPool;
use std::sync::Arc;

pub struct BankUserRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl BankUserRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}
