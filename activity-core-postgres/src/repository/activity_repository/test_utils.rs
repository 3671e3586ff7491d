use activity_core_db::models::{Activity, ActivityDetail};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde_json::json;
use uuid::Uuid;

pub fn create_test_activity(user_id: Uuid, object_id: Uuid, activity_type: &str) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        user_id,
        object_id,
        revision_id: None,
        activity_type: HeaplessString::try_from(activity_type).unwrap(),
        data: json!({"test": true}),
    }
}

pub fn create_test_activity_at(
    user_id: Uuid,
    object_id: Uuid,
    activity_type: &str,
    at: i64,
) -> Activity {
    Activity {
        timestamp: DateTime::from_timestamp(at, 0).unwrap(),
        ..create_test_activity(user_id, object_id, activity_type)
    }
}

pub fn create_test_detail(activity_id: Uuid) -> ActivityDetail {
    ActivityDetail {
        id: Uuid::new_v4(),
        activity_id,
        object_id: Uuid::new_v4(),
        object_type: HeaplessString::try_from("Resource").unwrap(),
        activity_type: HeaplessString::try_from("changed").unwrap(),
        data: json!({}),
    }
}
