use std::str::FromStr;

use heapless::String as HeaplessString;
use sqlx::postgres::PgRow;
use sqlx::Row;

use activity_core_api::{FeedError, FeedResult};

/// Converts a database row into a model.
///
/// The models keep bounded text in stack-allocated strings, which sqlx
/// cannot decode directly, so each row is mapped column by column.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> FeedResult<Self>;
}

/// Reads a required bounded-text column.
///
/// A stored value longer than `N` means the schema and the model disagree;
/// that surfaces as [`FeedError::StorageUnavailable`] rather than a
/// truncated value.
pub fn get_bounded_text<const N: usize>(row: &PgRow, col: &str) -> FeedResult<HeaplessString<N>> {
    let value: String = row.try_get(col)?;
    HeaplessString::from_str(&value).map_err(|_| {
        FeedError::StorageUnavailable(format!("column '{col}' value exceeds {N} characters"))
    })
}

/// Reads a nullable bounded-text column.
pub fn get_optional_bounded_text<const N: usize>(
    row: &PgRow,
    col: &str,
) -> FeedResult<Option<HeaplessString<N>>> {
    let value: Option<String> = row.try_get(col)?;
    match value {
        Some(value) => {
            let bounded = HeaplessString::from_str(&value).map_err(|_| {
                FeedError::StorageUnavailable(format!(
                    "column '{col}' value exceeds {N} characters"
                ))
            })?;
            Ok(Some(bounded))
        }
        None => Ok(None),
    }
}
