pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::bank_account_repository::BankAccountRepositoryImpl;
pub use repository::bank_user_repository::BankUserRepositoryImpl;
pub use service::BankAccountServiceImpl;

#[cfg(test)]
pub mod test_helper;
