pub mod repo_impl;
pub mod count_all;
pub mod create_batch;
pub mod load_page;

pub use repo_impl::BankAccountRepositoryImpl;
