use bank_system_api::domain::BankAccountDetails;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::infrastructure::PaginatedList;

/// One row of the administrative account listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankAccountListingViewModel {
    pub id: Uuid,
    pub name: String,
    pub unique_id: String,
    pub balance: Decimal,
    pub created_on: DateTime<Utc>,
    pub user_full_name: String,
}

impl From<BankAccountDetails> for BankAccountListingViewModel {
    fn from(details: BankAccountDetails) -> Self {
        Self {
            id: details.id,
            name: details.name.as_str().to_string(),
            unique_id: details.unique_id.as_str().to_string(),
            balance: details.balance,
            created_on: details.created_on,
            user_full_name: details.user_full_name.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllBankAccountsListViewModel {
    pub bank_accounts: PaginatedList<BankAccountListingViewModel>,
}
