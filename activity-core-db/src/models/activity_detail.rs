use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::activity::bounded_tag;
use crate::models::Identifiable;
use activity_core_api::FeedResult;

/// Finer-grained sub-record of an [`Activity`](crate::models::Activity).
///
/// Details name the sub-objects touched by one logged action, such as which
/// resources of a dataset changed. The parent activity owns its details: they
/// are written alongside it and the store removes them with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    pub id: Uuid,

    /// The owning activity.
    pub activity_id: Uuid,

    /// The touched sub-object.
    pub object_id: Uuid,

    /// Kind of the sub-object, e.g. `"Package"` or `"Resource"`.
    pub object_type: HeaplessString<64>,

    pub activity_type: HeaplessString<64>,

    /// Free-form payload, same contract as the parent's `data`.
    pub data: Value,
}

impl ActivityDetail {
    /// Builds a detail row for an existing activity.
    ///
    /// # Returns
    /// * `Ok(ActivityDetail)` - the populated row
    /// * `Err(FeedError::InvalidArgument)` - a bounded text value is too long
    pub fn new(
        activity_id: Uuid,
        object_id: Uuid,
        object_type: &str,
        activity_type: &str,
        data: Option<Value>,
    ) -> FeedResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            activity_id,
            object_id,
            object_type: bounded_tag(object_type)?,
            activity_type: bounded_tag(activity_type)?,
            data: data.unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        })
    }
}

impl Identifiable for ActivityDetail {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_core_api::FeedError;

    #[test]
    fn test_new_detail_links_to_parent() {
        let activity_id = Uuid::new_v4();
        let detail =
            ActivityDetail::new(activity_id, Uuid::new_v4(), "Resource", "changed", None).unwrap();

        assert_eq!(detail.activity_id, activity_id);
        assert_eq!(detail.object_type.as_str(), "Resource");
        assert_eq!(detail.activity_type.as_str(), "changed");
    }

    #[test]
    fn test_over_long_object_type_is_rejected() {
        let long_type = "y".repeat(70);
        let result =
            ActivityDetail::new(Uuid::new_v4(), Uuid::new_v4(), &long_type, "changed", None);

        assert!(matches!(result, Err(FeedError::InvalidArgument(_))));
    }
}
