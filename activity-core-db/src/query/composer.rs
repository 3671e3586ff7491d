//! Feed composition: predicate builders combined by set union.
//!
//! Every feed the engine serves is assembled here as a [`FeedQuery`], then
//! handed to a store in one piece so that union, ordering and windowing
//! happen in a single execution.

use uuid::Uuid;

use crate::query::builders;
use crate::query::feed_query::FeedQuery;
use crate::repository::{FollowGraph, GroupDirectory};
use activity_core_api::FeedResult;

/// The user's public stream: activities from the user, union activities
/// about the user. A row that is both, such as a user acting on their own
/// profile, is selected once.
pub fn user_activity_query(user_id: Uuid) -> FeedQuery {
    FeedQuery::from_filter(builders::from_user(user_id)).union(builders::about_user(user_id))
}

/// The dataset's stream: activities about the dataset.
pub fn package_activity_query(package_id: Uuid) -> FeedQuery {
    FeedQuery::from_filter(builders::about_package(package_id))
}

/// The group's stream: activities about the group or any of its datasets.
pub async fn group_activity_query(
    directory: &dyn GroupDirectory,
    group_id: Uuid,
) -> FeedResult<FeedQuery> {
    Ok(FeedQuery::from_filter(
        builders::about_group(directory, group_id).await?,
    ))
}

/// Everything the user follows, as one union over the per-relation terms.
pub async fn everything_followed_query(
    follow_graph: &dyn FollowGraph,
    directory: &dyn GroupDirectory,
    user_id: Uuid,
) -> FeedResult<FeedQuery> {
    Ok(FeedQuery::from_terms(
        builders::everything_followed_terms(follow_graph, directory, user_id).await?,
    ))
}

/// The dashboard: the user's own public stream, union everything they
/// follow. Supersets [`user_activity_query`] by construction.
pub async fn dashboard_activity_query(
    follow_graph: &dyn FollowGraph,
    directory: &dyn GroupDirectory,
    user_id: Uuid,
) -> FeedResult<FeedQuery> {
    let mut terms = vec![builders::from_user(user_id), builders::about_user(user_id)];
    terms.extend(builders::everything_followed_terms(follow_graph, directory, user_id).await?);
    Ok(FeedQuery::from_terms(terms))
}

/// The site-wide stream of recently changed datasets.
pub fn changed_packages_query() -> FeedQuery {
    FeedQuery::from_filter(builders::changed_packages())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::ActivityFilter;
    use crate::repository::{InMemoryFollowGraph, InMemoryGroupDirectory};

    #[test]
    fn test_user_query_unions_from_and_about() {
        let user_id = Uuid::new_v4();
        let query = user_activity_query(user_id);

        assert_eq!(
            query.terms(),
            &[
                ActivityFilter::FromUser(user_id),
                ActivityFilter::AboutObject(user_id),
            ]
        );
    }

    #[test]
    fn test_package_query_is_a_single_term() {
        let package_id = Uuid::new_v4();
        let query = package_activity_query(package_id);

        assert_eq!(query.terms(), &[ActivityFilter::AboutObject(package_id)]);
    }

    #[tokio::test]
    async fn test_dashboard_query_extends_user_query() {
        let follow_graph = InMemoryFollowGraph::new();
        let directory = InMemoryGroupDirectory::new();
        let user_id = Uuid::new_v4();

        let user_terms = user_activity_query(user_id);
        let dashboard = dashboard_activity_query(&follow_graph, &directory, user_id)
            .await
            .unwrap();

        assert_eq!(&dashboard.terms()[..2], user_terms.terms());
        assert!(dashboard.terms().len() > user_terms.terms().len());
    }

    #[test]
    fn test_changed_packages_query_filters_on_suffix() {
        let query = changed_packages_query();
        assert_eq!(
            query.terms(),
            &[ActivityFilter::TypeEndsWith("package".to_string())]
        );
    }
}
