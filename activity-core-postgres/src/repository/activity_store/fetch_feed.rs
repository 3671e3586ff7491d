use async_trait::async_trait;
use tracing::debug;

use activity_core_api::FeedResult;
use activity_core_db::models::Activity;
use activity_core_db::query::{FeedQuery, PageWindow};
use activity_core_db::repository::ActivityStore;

use crate::sql::feed_statement;
use crate::utils::TryFromRow;

use super::repo_impl::PgActivityStore;

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn fetch_feed(&self, query: &FeedQuery, window: PageWindow) -> FeedResult<Vec<Activity>> {
        let mut statement = feed_statement(query, window);
        debug!(sql = statement.sql(), "executing feed statement");

        let rows = statement.build().fetch_all(self.pool.as_ref()).await?;
        rows.iter().map(Activity::try_from_row).collect()
    }
}
