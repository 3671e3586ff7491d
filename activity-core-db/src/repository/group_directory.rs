use async_trait::async_trait;
use uuid::Uuid;

use activity_core_api::FeedResult;

/// Outbound contract for resolving group membership.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Whether the group exists at all.
    async fn group_exists(&self, group_id: Uuid) -> FeedResult<bool>;

    /// Datasets belonging to the group. Empty for groups without datasets;
    /// callers check existence separately to tell the two apart.
    async fn datasets_of(&self, group_id: Uuid) -> FeedResult<Vec<Uuid>>;
}
