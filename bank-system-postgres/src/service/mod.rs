pub mod bank_account_service;

pub use bank_account_service::BankAccountServiceImpl;
