use bank_system_api::domain::{NewBankUser, FULL_NAME_MAX_BYTES};
use bank_system_api::error::{validation_messages, ApiError, ApiResult};
use bank_system_api::service::{EmailSender, UserManager};
use heapless::String as HeaplessString;
use std::sync::Arc;
use validator::Validate;

use crate::infrastructure::encoding::{html_encode, url_encode};
use crate::models::RegisterInput;
use crate::notifications::SUCCESSFUL_REGISTRATION;
use crate::render::RequestContext;

pub const EMAIL_SUBJECT: &str = "Confirm your email";
pub const CONFIRM_EMAIL_PATH: &str = "/Account/ConfirmEmail";
const DEFAULT_RETURN_URL: &str = "/";

/// State of the registration form when it is shown (again)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPageModel {
    pub return_url: String,
    /// Messages to show above the form
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    Page(RegisterPageModel),
    LocalRedirect(String),
    RedirectToHome { success_message: String },
}

/// Self-service registration of new users
pub struct RegisterPage {
    user_manager: Arc<dyn UserManager>,
    email_sender: Arc<dyn EmailSender>,
    bank_system_email: String,
}

impl RegisterPage {
    pub fn new(
        user_manager: Arc<dyn UserManager>,
        email_sender: Arc<dyn EmailSender>,
        bank_system_email: impl Into<String>,
    ) -> Self {
        Self {
            user_manager,
            email_sender,
            bank_system_email: bank_system_email.into(),
        }
    }

    pub fn on_get(&self, ctx: &RequestContext, return_url: Option<&str>) -> PageResult {
        let return_url = local_return_url(return_url);
        if ctx.is_authenticated() {
            return PageResult::LocalRedirect(return_url);
        }
        PageResult::Page(RegisterPageModel {
            return_url,
            errors: Vec::new(),
        })
    }

    /// Register the user and send the email confirmation link
    ///
    /// Invalid input and identity provider rejections re-show the form;
    /// any other failure is returned as an error.
    pub async fn on_post(
        &self,
        ctx: &RequestContext,
        input: &RegisterInput,
        return_url: Option<&str>,
    ) -> ApiResult<PageResult> {
        let return_url = local_return_url(return_url);
        if ctx.is_authenticated() {
            return Ok(PageResult::LocalRedirect(return_url));
        }

        if let Err(errors) = input.validate() {
            return Ok(Self::form_with_errors(return_url, validation_messages(&errors)));
        }

        let full_name = HeaplessString::<FULL_NAME_MAX_BYTES>::try_from(input.full_name.as_str())
            .map_err(|_| ApiError::ValidationError("full_name exceeds its storage capacity".to_string()))?;

        let new_user = NewBankUser {
            user_name: input.email.clone(),
            email: input.email.clone(),
            full_name,
        };
        let user = match self.user_manager.create(new_user, &input.password).await {
            Ok(user) => user,
            Err(e @ ApiError::IdentityError(_)) => {
                tracing::debug!(error = %e, "Identity provider rejected registration");
                return Ok(Self::form_with_errors(return_url, e.messages()));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = %user.id, "User created a new account with password.");

        let code = self.user_manager.generate_email_confirmation_token(&user).await?;
        let callback_url = confirm_email_url(ctx, &user.id.to_string(), &code);
        let message = format!(
            "Please confirm your email by <a href=\"{}\">clicking here</a>.",
            html_encode(&callback_url)
        );

        self.email_sender
            .send_email(&self.bank_system_email, &input.email, EMAIL_SUBJECT, &message)
            .await?;

        Ok(PageResult::RedirectToHome {
            success_message: SUCCESSFUL_REGISTRATION.to_string(),
        })
    }

    fn form_with_errors(return_url: String, errors: Vec<String>) -> PageResult {
        PageResult::Page(RegisterPageModel { return_url, errors })
    }
}

fn confirm_email_url(ctx: &RequestContext, user_id: &str, code: &str) -> String {
    format!(
        "{}://{}{}?userId={}&code={}",
        ctx.scheme,
        ctx.host,
        CONFIRM_EMAIL_PATH,
        url_encode(user_id),
        url_encode(code)
    )
}

/// Only same-site paths are accepted as redirect targets
fn local_return_url(return_url: Option<&str>) -> String {
    match return_url {
        Some(url) if is_local_url(url) => url.strip_prefix('~').unwrap_or(url).to_string(),
        _ => DEFAULT_RETURN_URL.to_string(),
    }
}

fn is_local_url(url: &str) -> bool {
    let path = url.strip_prefix('~').unwrap_or(url);
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
