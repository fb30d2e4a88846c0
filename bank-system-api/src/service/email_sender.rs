use async_trait::async_trait;

use crate::error::ApiResult;

/// Outgoing email transport
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &self,
        sender: &str,
        receiver: &str,
        subject: &str,
        html_message: &str,
    ) -> ApiResult<()>;
}
