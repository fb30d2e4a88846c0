//! Contract between request handlers and the view layer

use bank_system_api::error::ApiResult;
use uuid::Uuid;

/// The signed-in user, as established by the authentication layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub user_name: String,
}

/// Per-request data handlers need besides their inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub user: Option<AuthenticatedUser>,
    /// `http` or `https`
    pub scheme: String,
    /// Host and optional port, as sent by the client
    pub host: String,
}

impl RequestContext {
    pub fn anonymous(scheme: &str, host: &str) -> Self {
        Self {
            user: None,
            scheme: scheme.to_string(),
            host: host.to_string(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Turns a view model into a response body
pub trait ViewRenderer<M>: Send + Sync {
    type Output;

    fn render(&self, view_name: &str, model: &M, ctx: &RequestContext) -> ApiResult<Self::Output>;
}
