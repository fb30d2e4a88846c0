use async_trait::async_trait;
use sqlx::Database;

use crate::repository::pagination::PageRequest;

/// Generic repository trait for loading one page of entities
///
/// Implementations must return entities in a stable order so that
/// consecutive pages neither overlap nor skip entities.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type returned for each row
///
/// # Example
/// ```ignore
/// impl LoadPage<Postgres, BankAccountDetailsModel> for BankAccountRepositoryImpl {
///     async fn load_page(&self, page: PageRequest) -> Result<Vec<BankAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadPage<DB: Database, T>: Send + Sync {
    /// Load the entities inside the requested window
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - At most `page.limit` entities; empty past the end
    /// * `Err` - An error if the query could not be executed
    async fn load_page(&self, page: PageRequest) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
