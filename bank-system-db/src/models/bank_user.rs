use bank_system_api::domain::{EMAIL_MAX_BYTES, FULL_NAME_MAX_BYTES};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - Owner of bank accounts; credentials live with the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankUserModel {
    pub id: Uuid,

    pub email: HeaplessString<EMAIL_MAX_BYTES>,
    pub full_name: HeaplessString<FULL_NAME_MAX_BYTES>,

    pub created_on: DateTime<Utc>,
}

impl Identifiable for BankUserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
