pub mod bank_account;
pub mod user;

pub use bank_account::*;
pub use user::*;
