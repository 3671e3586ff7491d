use async_trait::async_trait;

use crate::models::Identifiable;
use activity_core_api::FeedResult;

/// Trait for persisting a batch of rows atomically.
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Persists all items or none of them.
    ///
    /// # Arguments
    /// * `items` - the rows to write, ids already assigned
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - the items as written
    /// * `Err(FeedError::StorageUnavailable)` - nothing was written
    async fn create_batch(&self, items: Vec<T>) -> FeedResult<Vec<T>>;
}
