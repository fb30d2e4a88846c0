pub mod bank_account;
pub mod register;

pub use bank_account::*;
pub use register::*;
