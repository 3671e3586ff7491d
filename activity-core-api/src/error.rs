use thiserror::Error;

/// Error kinds surfaced at the feed query boundary.
///
/// A feed call either returns a complete, consistently ordered page or fails
/// with one of these kinds; there are no partial results. Referencing an
/// entity that does not exist is not an error, it yields an empty feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// A caller-supplied argument was rejected (e.g. a negative limit or
    /// offset, or an over-long bounded string). Nothing was executed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying store or a membership resolver failed to produce a
    /// result. No retries happen at this layer; retry policy belongs to the
    /// storage collaborator.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for FeedError {
    fn from(err: sqlx::Error) -> Self {
        FeedError::StorageUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::InvalidArgument("limit must not be negative, got -1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: limit must not be negative, got -1"
        );

        let err = FeedError::StorageUnavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: connection refused");
    }
}
