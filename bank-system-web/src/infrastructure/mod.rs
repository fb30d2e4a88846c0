pub mod encoding;
pub mod paginated_list;

pub use paginated_list::*;
