use async_trait::async_trait;
use uuid::Uuid;

use activity_core_api::FeedResult;
use activity_core_db::models::Activity;
use activity_core_db::repository::LoadBatch;

use crate::utils::TryFromRow;

use super::repo_impl::PgActivityRepository;

impl PgActivityRepository {
    pub(super) async fn load_batch_impl(
        repo: &PgActivityRepository,
        ids: &[Uuid],
    ) -> FeedResult<Vec<Option<Activity>>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"
            SELECT id, timestamp, user_id, object_id, revision_id, activity_type, data
            FROM activity WHERE id = ANY($1)
        "#;
        let rows = sqlx::query(query).bind(ids).fetch_all(repo.pool.as_ref()).await?;

        let mut item_map = std::collections::HashMap::new();
        for row in rows {
            let item = Activity::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(item_map.remove(id));
        }
        Ok(result)
    }
}

#[async_trait]
impl LoadBatch<Activity> for PgActivityRepository {
    async fn load_batch(&self, ids: &[Uuid]) -> FeedResult<Vec<Option<Activity>>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use activity_core_db::repository::{CreateBatch, LoadBatch};
    use uuid::Uuid;

    use crate::repository::activity_repository::test_utils::create_test_activity;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore]
    async fn test_load_batch_preserves_order_and_reports_missing(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.stores().activity_repository();

        let row = create_test_activity(Uuid::new_v4(), Uuid::new_v4(), "new_package");
        repo.create_batch(vec![row.clone()]).await?;

        let missing = Uuid::new_v4();
        let loaded = repo.load_batch(&[missing, row.id]).await?;

        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].is_none());
        assert_eq!(loaded[1].as_ref().map(|item| item.id), Some(row.id));

        Ok(())
    }
}
