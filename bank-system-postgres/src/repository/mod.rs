pub mod bank_account_repository;
pub mod bank_user_repository;
pub mod db_init;

#[cfg(test)]
pub mod test_utils;
