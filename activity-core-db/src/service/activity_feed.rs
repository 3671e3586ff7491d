//! The inbound feed surface: six read-only operations over the log.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::models::Activity;
use crate::query::{composer, FeedQuery, PageWindow};
use crate::repository::{ActivityStore, FollowGraph, GroupDirectory};
use activity_core_api::FeedResult;

/// Serves the aggregated activity feeds.
///
/// Collaborators are taken explicitly at construction; nothing here reaches
/// for ambient state. Each call validates its window, composes the query,
/// and hands union, ordering and windowing to the store as one execution,
/// so a result is always a complete, consistently ordered page.
pub struct ActivityFeedService {
    store: Arc<dyn ActivityStore>,
    follow_graph: Arc<dyn FollowGraph>,
    directory: Arc<dyn GroupDirectory>,
}

impl ActivityFeedService {
    pub fn new(
        store: Arc<dyn ActivityStore>,
        follow_graph: Arc<dyn FollowGraph>,
        directory: Arc<dyn GroupDirectory>,
    ) -> Self {
        Self { store, follow_graph, directory }
    }

    /// The user's public stream: activities from the user or about the user,
    /// e.g. "U created dataset P", "V started following U".
    pub async fn user_activity_list(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> FeedResult<Vec<Activity>> {
        let window = PageWindow::new(limit, offset)?;
        let query = composer::user_activity_query(user_id);
        self.run("user", &query, window).await
    }

    /// The dataset's stream: activities about the dataset.
    pub async fn package_activity_list(
        &self,
        package_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> FeedResult<Vec<Activity>> {
        let window = PageWindow::new(limit, offset)?;
        let query = composer::package_activity_query(package_id);
        self.run("package", &query, window).await
    }

    /// The group's stream: activities about the group or any of its member
    /// datasets. A group id that resolves to nothing yields an empty feed.
    pub async fn group_activity_list(
        &self,
        group_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> FeedResult<Vec<Activity>> {
        let window = PageWindow::new(limit, offset)?;
        let query = composer::group_activity_query(self.directory.as_ref(), group_id).await?;
        self.run("group", &query, window).await
    }

    /// Activities from everything the user follows: followed users' actions,
    /// activities about followed datasets, and activities about followed
    /// groups and their datasets.
    pub async fn activities_from_everything_followed_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> FeedResult<Vec<Activity>> {
        let window = PageWindow::new(limit, offset)?;
        let query = composer::everything_followed_query(
            self.follow_graph.as_ref(),
            self.directory.as_ref(),
            user_id,
        )
        .await?;
        self.run("everything_followed", &query, window).await
    }

    /// The user's dashboard: their own public stream plus everything they
    /// follow, as one feed.
    pub async fn dashboard_activity_list(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> FeedResult<Vec<Activity>> {
        let window = PageWindow::new(limit, offset)?;
        let query = composer::dashboard_activity_query(
            self.follow_graph.as_ref(),
            self.directory.as_ref(),
            user_id,
        )
        .await?;
        self.run("dashboard", &query, window).await
    }

    /// The site-wide stream of recently created, changed or deleted
    /// datasets.
    pub async fn recently_changed_packages_activity_list(
        &self,
        limit: i64,
        offset: i64,
    ) -> FeedResult<Vec<Activity>> {
        let window = PageWindow::new(limit, offset)?;
        let query = composer::changed_packages_query();
        self.run("recently_changed_packages", &query, window).await
    }

    async fn run(
        &self,
        feed: &str,
        query: &FeedQuery,
        window: PageWindow,
    ) -> FeedResult<Vec<Activity>> {
        debug!(feed, terms = query.terms().len(), "executing feed query");
        self.store.fetch_feed(query, window).await
    }
}
