use bank_system_db::models::{BankAccountModel, BankUserModel};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn create_test_user(email: &str, full_name: &str) -> BankUserModel {
    BankUserModel {
        id: Uuid::new_v4(),
        email: HeaplessString::try_from(email).unwrap(),
        full_name: HeaplessString::try_from(full_name).unwrap(),
        created_on: Utc::now(),
    }
}

/// Account number `n` of `user_id`, unique id `ABC` followed by `n` padded to 13 digits
pub fn create_test_account(user_id: Uuid, n: usize, created_on: DateTime<Utc>) -> BankAccountModel {
    BankAccountModel {
        id: Uuid::new_v4(),
        name: HeaplessString::try_from(format!("Account {n}").as_str()).unwrap(),
        unique_id: HeaplessString::try_from(format!("ABC{n:013}").as_str()).unwrap(),
        balance: Decimal::new(n as i64 * 100, 2),
        created_on,
        user_id,
    }
}
