use async_trait::async_trait;

use crate::models::Activity;
use crate::query::{FeedQuery, PageWindow};
use activity_core_api::FeedResult;

/// Outbound contract for the engine that executes composed feed queries.
///
/// Implementations interpret the query's union of terms, apply the shared
/// ordering contract (`timestamp` descending, ties broken by `id`
/// descending) and the window, and materialize the page. Reads never mutate
/// the log, so concurrent calls need no coordination here.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Executes `query`, orders and windows the matched rows, and
    /// materializes the page.
    ///
    /// # Arguments
    /// * `query` - the composed union of filter terms
    /// * `window` - validated offset/limit to apply after ordering
    ///
    /// # Returns
    /// * `Ok(Vec<Activity>)` - the complete page, most recent first; empty
    ///   when nothing matches
    /// * `Err(FeedError::StorageUnavailable)` - the store could not produce
    ///   the page; no partial result is returned
    async fn fetch_feed(&self, query: &FeedQuery, window: PageWindow) -> FeedResult<Vec<Activity>>;
}
