use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::FULL_NAME_MAX_BYTES;

/// Limit in characters of the `name` column
pub const ACCOUNT_NAME_MAX_LENGTH: usize = 35;
pub const ACCOUNT_NAME_MAX_BYTES: usize = 4 * ACCOUNT_NAME_MAX_LENGTH;
/// Unique ids are ASCII, so characters and bytes coincide
pub const ACCOUNT_UNIQUE_ID_LENGTH: usize = 16;

/// # Documentation
/// - Bank account as exposed by the account service, including the owner's full name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDetails {
    pub id: Uuid,

    pub name: HeaplessString<ACCOUNT_NAME_MAX_BYTES>,
    /// Bank prefix (three letters) followed by the account number
    pub unique_id: HeaplessString<ACCOUNT_UNIQUE_ID_LENGTH>,

    pub balance: Decimal,
    pub created_on: DateTime<Utc>,

    pub user_id: Uuid,
    pub user_full_name: HeaplessString<FULL_NAME_MAX_BYTES>,
}
