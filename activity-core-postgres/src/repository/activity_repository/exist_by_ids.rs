use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use activity_core_api::FeedResult;
use activity_core_db::repository::ExistByIds;

use super::repo_impl::PgActivityRepository;

impl PgActivityRepository {
    pub(super) async fn exist_by_ids_impl(
        repo: &PgActivityRepository,
        ids: &[Uuid],
    ) -> FeedResult<Vec<(Uuid, bool)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT id FROM activity WHERE id = ANY($1)"#;
        let rows = sqlx::query(query).bind(ids).fetch_all(repo.pool.as_ref()).await?;

        let mut found = std::collections::HashSet::new();
        for row in rows {
            let id: Uuid = row.try_get("id")?;
            found.insert(id);
        }

        Ok(ids.iter().map(|id| (*id, found.contains(id))).collect())
    }
}

#[async_trait]
impl ExistByIds for PgActivityRepository {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> FeedResult<Vec<(Uuid, bool)>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use activity_core_db::repository::{CreateBatch, ExistByIds};
    use uuid::Uuid;

    use crate::repository::activity_repository::test_utils::create_test_activity;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore]
    async fn test_exist_by_ids_flags_each_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.stores().activity_repository();

        let row = create_test_activity(Uuid::new_v4(), Uuid::new_v4(), "new_user");
        repo.create_batch(vec![row.clone()]).await?;

        let missing = Uuid::new_v4();
        let report = repo.exist_by_ids(&[row.id, missing]).await?;

        assert_eq!(report, vec![(row.id, true), (missing, false)]);

        Ok(())
    }
}
