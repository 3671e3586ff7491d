use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Identifiable;
use activity_core_api::FeedResult;

/// Trait for loading a batch of rows by id.
#[async_trait]
pub trait LoadBatch<T: Identifiable>: Send + Sync {
    /// Loads the rows for `ids`, preserving input order.
    ///
    /// # Returns
    /// * `Ok(Vec<Option<T>>)` - one slot per requested id; `None` where no
    ///   row exists
    async fn load_batch(&self, ids: &[Uuid]) -> FeedResult<Vec<Option<T>>>;
}
