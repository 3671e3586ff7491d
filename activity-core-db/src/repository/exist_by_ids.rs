use async_trait::async_trait;
use uuid::Uuid;

use activity_core_api::FeedResult;

/// Trait for checking which of a batch of ids have rows.
#[async_trait]
pub trait ExistByIds: Send + Sync {
    /// Reports existence per id, preserving input order.
    async fn exist_by_ids(&self, ids: &[Uuid]) -> FeedResult<Vec<(Uuid, bool)>>;
}
