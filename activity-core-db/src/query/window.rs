use tracing::warn;

use activity_core_api::{FeedError, FeedResult};

/// The offset/limit window applied after ordering a composed feed.
///
/// The log's convention is falsy-means-unbounded: a limit of zero means "no
/// limit" and an offset of zero means "start at the head", so zero is never
/// an error. Negative values are rejected at construction; this layer does
/// not clamp silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: i64,
    offset: i64,
}

impl PageWindow {
    /// Validates a raw limit/offset pair from the call boundary.
    ///
    /// # Returns
    /// * `Ok(PageWindow)` - the window to hand to the store
    /// * `Err(FeedError::InvalidArgument)` - `limit` or `offset` is negative
    pub fn new(limit: i64, offset: i64) -> FeedResult<Self> {
        if limit < 0 {
            warn!(limit, "rejecting negative feed limit");
            return Err(FeedError::InvalidArgument(format!(
                "limit must not be negative, got {limit}"
            )));
        }
        if offset < 0 {
            warn!(offset, "rejecting negative feed offset");
            return Err(FeedError::InvalidArgument(format!(
                "offset must not be negative, got {offset}"
            )));
        }
        Ok(Self { limit, offset })
    }

    /// Window with no row cap, starting at the head of the feed.
    pub fn unbounded() -> Self {
        Self { limit: 0, offset: 0 }
    }

    /// Row cap, or `None` when unbounded.
    pub fn limit(&self) -> Option<i64> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Rows to skip, or `None` when starting at the head.
    pub fn offset(&self) -> Option<i64> {
        (self.offset > 0).then_some(self.offset)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_unbounded() {
        let window = PageWindow::new(0, 0).unwrap();
        assert_eq!(window.limit(), None);
        assert_eq!(window.offset(), None);
    }

    #[test]
    fn test_positive_values_are_kept() {
        let window = PageWindow::new(15, 30).unwrap();
        assert_eq!(window.limit(), Some(15));
        assert_eq!(window.offset(), Some(30));
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let result = PageWindow::new(-1, 0);
        assert!(matches!(result, Err(FeedError::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let result = PageWindow::new(10, -5);
        assert!(matches!(result, Err(FeedError::InvalidArgument(_))));
    }
}
