pub mod bank_account;
pub mod bank_user;
pub mod identifiable;

pub use bank_account::*;
pub use bank_user::*;
pub use identifiable::*;
