use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Create multiple entities in a single transaction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The saved entities, in input order
    /// * `Err` - An error if any entity could not be saved; nothing is saved then
    async fn create_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
