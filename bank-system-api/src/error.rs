use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Identity error: {}", .0.join("; "))]
    IdentityError(Vec<String>),

    #[error("Email error: {0}")]
    EmailError(String),
}

impl ApiError {
    /// Human readable messages suitable for showing next to a form.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::IdentityError(descriptions) => descriptions.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::ValidationError(validation_messages(&errors).join("; "))
    }
}

/// Flattens field errors, including those of nested structs, into display messages
///
/// Fields are visited in name order. Uses the error's message when the
/// validator declares one, otherwise falls back to `"<field>: <code>"`.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages
}

fn collect_messages(errors: &ValidationErrors, messages: &mut Vec<String>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => messages.push(message.to_string()),
                        None => messages.push(format!("{field}: {}", error.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, messages),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, messages);
                }
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
