pub mod count_all;
pub mod create_batch;
pub mod load_page;
pub mod pagination;

// Re-exports
pub use count_all::*;
pub use create_batch::*;
pub use load_page::*;
pub use pagination::*;
