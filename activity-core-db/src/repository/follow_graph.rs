use async_trait::async_trait;
use uuid::Uuid;

use activity_core_api::FeedResult;

/// Outbound contract for resolving follow relationships.
///
/// A user that follows nothing yields empty sets, not an error. Duplicate
/// ids in a result set are tolerated; they cannot change what a union
/// selects.
#[async_trait]
pub trait FollowGraph: Send + Sync {
    /// Users whose activities the given user follows.
    async fn followed_users(&self, user_id: Uuid) -> FeedResult<Vec<Uuid>>;

    /// Datasets the given user follows.
    async fn followed_datasets(&self, user_id: Uuid) -> FeedResult<Vec<Uuid>>;

    /// Groups the given user follows.
    async fn followed_groups(&self, user_id: Uuid) -> FeedResult<Vec<Uuid>>;
}
