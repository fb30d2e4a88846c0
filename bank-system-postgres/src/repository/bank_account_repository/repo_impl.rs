use bank_system_db::models::{BankAccountDetailsModel, BankAccountModel};
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct BankAccountRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl BankAccountRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for BankAccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(BankAccountModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            unique_id: get_heapless_string(row, "unique_id")?,
            balance: row.try_get("balance")?,
            created_on: row.try_get("created_on")?,
            user_id: row.try_get("user_id")?,
        })
    }
}

impl TryFromRow<PgRow> for BankAccountDetailsModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(BankAccountDetailsModel {
            account: BankAccountModel::try_from_row(row)?,
            user_full_name: get_heapless_string(row, "user_full_name")?,
        })
    }
}
