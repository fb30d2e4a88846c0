pub mod accounts;

pub use accounts::AccountsController;
