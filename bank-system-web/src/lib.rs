pub mod controllers;
pub mod infrastructure;
pub mod models;
pub mod notifications;
pub mod pages;
pub mod render;
pub mod telemetry;

pub use controllers::AccountsController;
pub use infrastructure::{paginate, PaginatedList, ToPaginatedList};
pub use pages::RegisterPage;
pub use render::{AuthenticatedUser, RequestContext, ViewRenderer};

#[cfg(test)]
pub mod test_utils;
