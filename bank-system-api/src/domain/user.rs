use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Limit in characters, as enforced by validation and the `full_name` columns
pub const FULL_NAME_MAX_LENGTH: usize = 100;
pub const FULL_NAME_MAX_CHARS: u64 = FULL_NAME_MAX_LENGTH as u64;
/// UTF-8 capacity of a full name holding `FULL_NAME_MAX_LENGTH` characters
pub const FULL_NAME_MAX_BYTES: usize = 4 * FULL_NAME_MAX_LENGTH;
/// Limit in characters of the `email` column
pub const EMAIL_MAX_LENGTH: usize = 256;
pub const EMAIL_MAX_BYTES: usize = 4 * EMAIL_MAX_LENGTH;
pub const PASSWORD_MIN_LENGTH: u64 = 6;
pub const PASSWORD_MAX_LENGTH: u64 = 100;

/// A user known to the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankUser {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub full_name: HeaplessString<FULL_NAME_MAX_BYTES>,
    pub email_confirmed: bool,
}

/// Data required to register a user; the password travels separately
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBankUser {
    pub user_name: String,
    pub email: String,
    pub full_name: HeaplessString<FULL_NAME_MAX_BYTES>,
}
