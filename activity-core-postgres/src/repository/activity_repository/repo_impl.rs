use std::sync::Arc;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use activity_core_api::FeedResult;
use activity_core_db::models::{Activity, ActivityDetail};

use crate::utils::{get_bounded_text, get_optional_bounded_text, TryFromRow};

/// Row-level access to the activity log for producers and admin tooling.
///
/// The feed side never goes through this type; reads for feeds run through
/// [`PgActivityStore`](crate::repository::activity_store::PgActivityStore).
pub struct PgActivityRepository {
    pub(crate) pool: Arc<PgPool>,
}

impl PgActivityRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for Activity {
    fn try_from_row(row: &PgRow) -> FeedResult<Self> {
        Ok(Activity {
            id: row.try_get("id")?,
            timestamp: row.try_get("timestamp")?,
            user_id: row.try_get("user_id")?,
            object_id: row.try_get("object_id")?,
            revision_id: get_optional_bounded_text(row, "revision_id")?,
            activity_type: get_bounded_text(row, "activity_type")?,
            data: row.try_get("data")?,
        })
    }
}

impl TryFromRow<PgRow> for ActivityDetail {
    fn try_from_row(row: &PgRow) -> FeedResult<Self> {
        Ok(ActivityDetail {
            id: row.try_get("id")?,
            activity_id: row.try_get("activity_id")?,
            object_id: row.try_get("object_id")?,
            object_type: get_bounded_text(row, "object_type")?,
            activity_type: get_bounded_text(row, "activity_type")?,
            data: row.try_get("data")?,
        })
    }
}

pub(super) async fn insert_activity(
    conn: &mut sqlx::PgConnection,
    activity: &Activity,
) -> FeedResult<()> {
    let query = r#"
        INSERT INTO activity (id, timestamp, user_id, object_id, revision_id, activity_type, data)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
    "#;
    sqlx::query(query)
        .bind(activity.id)
        .bind(activity.timestamp)
        .bind(activity.user_id)
        .bind(activity.object_id)
        .bind(activity.revision_id.as_ref().map(|rev| rev.as_str()))
        .bind(activity.activity_type.as_str())
        .bind(activity.data.clone())
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub(super) async fn insert_detail(
    conn: &mut sqlx::PgConnection,
    detail: &ActivityDetail,
) -> FeedResult<()> {
    let query = r#"
        INSERT INTO activity_detail (id, activity_id, object_id, object_type, activity_type, data)
        VALUES ($1, $2, $3, $4, $5, $6)
    "#;
    sqlx::query(query)
        .bind(detail.id)
        .bind(detail.activity_id)
        .bind(detail.object_id)
        .bind(detail.object_type.as_str())
        .bind(detail.activity_type.as_str())
        .bind(detail.data.clone())
        .execute(&mut *conn)
        .await?;
    Ok(())
}
