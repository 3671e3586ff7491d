use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::Identifiable;
use activity_core_api::{FeedError, FeedResult};

/// One event in the append-only activity log.
///
/// Rows are insert-only: nothing updates an activity after creation, and
/// removal is an administrative purge outside this layer. `object_id` may
/// name a user, a dataset or a group; all ids live in one shared namespace,
/// so an id never refers to two different entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,

    /// Creation time. Feeds sort on this, most recent first, with `id`
    /// breaking ties.
    pub timestamp: DateTime<Utc>,

    /// The actor who performed the action.
    pub user_id: Uuid,

    /// The entity the action concerns (a user, dataset or group id).
    pub object_id: Uuid,

    /// Optional reference to a versioned-resource snapshot.
    pub revision_id: Option<HeaplessString<64>>,

    /// Open string tag such as `"new_package"`, `"changed_package"`,
    /// `"deleted_package"` or `"new_user"`. New tags need no registration.
    pub activity_type: HeaplessString<64>,

    /// Free-form payload per activity type, consumed by the rendering side.
    pub data: Value,
}

impl Activity {
    /// Builds an activity with a generated id and the current time.
    ///
    /// `data` defaults to an empty JSON object when `None`.
    ///
    /// # Returns
    /// * `Ok(Activity)` - the populated row, ready to persist
    /// * `Err(FeedError::InvalidArgument)` - `activity_type` or `revision_id`
    ///   exceeds the bounded column length
    pub fn new(
        user_id: Uuid,
        object_id: Uuid,
        revision_id: Option<&str>,
        activity_type: &str,
        data: Option<Value>,
    ) -> FeedResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id,
            object_id,
            revision_id: revision_id.map(bounded_tag).transpose()?,
            activity_type: bounded_tag(activity_type)?,
            data: data.unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        })
    }
}

impl Identifiable for Activity {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Validates a bounded text value at the call boundary rather than letting
/// the store truncate it.
pub(crate) fn bounded_tag(value: &str) -> FeedResult<HeaplessString<64>> {
    HeaplessString::try_from(value)
        .map_err(|_| FeedError::InvalidArgument(format!("value '{value}' exceeds 64 characters")))
}
