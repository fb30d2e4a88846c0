use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for counting every stored entity of type `T`
///
/// The count must use the same filtering as [`crate::repository::LoadPage`]
/// on the same repository.
#[async_trait]
pub trait CountAll<DB: Database, T>: Send + Sync {
    async fn count_all(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
