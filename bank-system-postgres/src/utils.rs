use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    to_heapless_string(&s, col_name)
}

/// Converts a column value, failing when it exceeds the capacity `N`.
pub fn to_heapless_string<const N: usize>(
    value: &str,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::from_str(value).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} bytes)").into()
    })
}

/// Converts a storage count into `usize`, rejecting negative values.
pub fn count_to_usize(count: i64) -> Result<usize, Box<dyn Error + Send + Sync>> {
    usize::try_from(count).map_err(|_| format!("Invalid row count: {count}").into())
}
