use async_trait::async_trait;

use activity_core_api::FeedResult;
use activity_core_db::models::Activity;
use activity_core_db::repository::CreateBatch;

use super::repo_impl::{insert_activity, PgActivityRepository};

impl PgActivityRepository {
    pub(super) async fn create_batch_impl(
        repo: &PgActivityRepository,
        items: Vec<Activity>,
    ) -> FeedResult<Vec<Activity>> {
        if items.is_empty() {
            return Ok(items);
        }

        let mut tx = repo.pool.begin().await?;
        for item in &items {
            insert_activity(&mut *tx, item).await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Activity> for PgActivityRepository {
    async fn create_batch(&self, items: Vec<Activity>) -> FeedResult<Vec<Activity>> {
        Self::create_batch_impl(self, items).await
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
    async fn test_create_batch_roundtrip() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let ctx = setup_test_context().await?;
        let repo = ctx.stores().activity_repository();

        let first = create_test_activity(Uuid::new_v4(), Uuid::new_v4(), "new_package");
        let second = create_test_activity(Uuid::new_v4(), Uuid::new_v4(), "changed_package");
        repo.create_batch(vec![first.clone(), second.clone()]).await?;

        let loaded = repo.load_batch(&[first.id, second.id]).await?;

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].as_ref().map(|row| row.id), Some(first.id));
        assert_eq!(
            loaded[1].as_ref().map(|row| row.activity_type.as_str()),
            Some("changed_package")
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_create_batch_of_nothing_is_a_no_op(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.stores().activity_repository();

        let written = repo.create_batch(Vec::new()).await?;
        assert!(written.is_empty());

        Ok(())
    }
}
