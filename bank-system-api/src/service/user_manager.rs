use async_trait::async_trait;

use crate::domain::{BankUser, NewBankUser};
use crate::error::ApiResult;

/// Membership operations delegated to the identity provider
#[async_trait]
pub trait UserManager: Send + Sync {
    /// Create a user with the given password
    ///
    /// # Returns
    /// * `Ok(BankUser)` - The created user, with its assigned id
    /// * `Err(ApiError::IdentityError)` - The provider rejected the user or password;
    ///   carries one description per failed rule
    async fn create(&self, user: NewBankUser, password: &str) -> ApiResult<BankUser>;

    /// Token the user must echo back to confirm ownership of the email address
    async fn generate_email_confirmation_token(&self, user: &BankUser) -> ApiResult<String>;
}
