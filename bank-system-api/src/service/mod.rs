pub mod bank_account_service;
pub mod email_sender;
pub mod user_manager;

pub use bank_account_service::*;
pub use email_sender::*;
pub use user_manager::*;
