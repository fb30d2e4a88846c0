use bank_system_api::domain::{
    BankAccountDetails, ACCOUNT_NAME_MAX_BYTES, ACCOUNT_UNIQUE_ID_LENGTH, FULL_NAME_MAX_BYTES,
};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - Bank account row as stored in `bank_account`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountModel {
    pub id: Uuid,

    pub name: HeaplessString<ACCOUNT_NAME_MAX_BYTES>,
    pub unique_id: HeaplessString<ACCOUNT_UNIQUE_ID_LENGTH>,

    pub balance: Decimal,
    pub created_on: DateTime<Utc>,

    /// References BankUserModel.id
    pub user_id: Uuid,
}

/// # Documentation
/// - Account joined with its owner's full name, as read by listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDetailsModel {
    pub account: BankAccountModel,
    pub user_full_name: HeaplessString<FULL_NAME_MAX_BYTES>,
}

impl Identifiable for BankAccountModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for BankAccountDetailsModel {
    fn get_id(&self) -> Uuid {
        self.account.id
    }
}

impl From<BankAccountDetailsModel> for BankAccountDetails {
    fn from(model: BankAccountDetailsModel) -> Self {
        let BankAccountDetailsModel { account, user_full_name } = model;
        BankAccountDetails {
            id: account.id,
            name: account.name,
            unique_id: account.unique_id,
            balance: account.balance,
            created_on: account.created_on,
            user_id: account.user_id,
            user_full_name,
        }
    }
}
