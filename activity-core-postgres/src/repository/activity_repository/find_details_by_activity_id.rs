use uuid::Uuid;

use activity_core_api::FeedResult;
use activity_core_db::models::ActivityDetail;

use crate::utils::TryFromRow;

use super::repo_impl::PgActivityRepository;

impl PgActivityRepository {
    /// Detail rows belonging to one activity.
    ///
    /// An activity without details, or an unknown activity id, yields an
    /// empty list.
    pub async fn find_details_by_activity_id(
        &self,
        activity_id: Uuid,
    ) -> FeedResult<Vec<ActivityDetail>> {
        let query = r#"
            SELECT id, activity_id, object_id, object_type, activity_type, data
            FROM activity_detail WHERE activity_id = $1
        "#;
        let rows = sqlx::query(query)
            .bind(activity_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(ActivityDetail::try_from_row).collect()
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use uuid::Uuid;

    use crate::repository::activity_repository::test_utils::{
        create_test_activity, create_test_detail,
    };
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore]
    async fn test_details_follow_their_activity_on_delete(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.stores().activity_repository();

        let activity = create_test_activity(Uuid::new_v4(), Uuid::new_v4(), "changed_package");
        let detail = create_test_detail(activity.id);
        repo.create_with_details(activity.clone(), vec![detail]).await?;

        assert_eq!(repo.find_details_by_activity_id(activity.id).await?.len(), 1);

        // Administrative purge of the parent cascades to its details.
        sqlx::query("DELETE FROM activity WHERE id = $1")
            .bind(activity.id)
            .execute(repo.pool.as_ref())
            .await?;

        assert!(repo.find_details_by_activity_id(activity.id).await?.is_empty());

        Ok(())
    }
}
