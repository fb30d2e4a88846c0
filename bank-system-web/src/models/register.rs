use bank_system_api::domain::{FULL_NAME_MAX_CHARS, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// Registration form as posted by the browser
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(
        length(min = 1, message = "The Email field is required."),
        custom(function = "validate_email_format")
    )]
    pub email: String,

    #[validate(length(
        min = 1,
        max = FULL_NAME_MAX_CHARS,
        message = "The Full Name field is required and must be at most 100 characters long."
    ))]
    pub full_name: String,

    #[validate(length(
        min = PASSWORD_MIN_LENGTH,
        max = PASSWORD_MAX_LENGTH,
        message = "The Password must be at least 6 and at max 100 characters long."
    ))]
    pub password: String,

    #[validate(must_match(
        other = "password",
        message = "The password and confirmation password do not match."
    ))]
    pub confirm_password: String,
}

/// An empty email is only reported as missing, never as malformed
fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email")
        .with_message("The Email field is not a valid e-mail address.".into()))
}
