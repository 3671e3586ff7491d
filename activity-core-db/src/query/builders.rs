//! Predicate builders: an entity id in, a declarative filter out.
//!
//! The simple builders are pure constructors. The ones that depend on
//! relationship sets resolve them through the outbound collaborators first,
//! which makes them the only asynchronous step of composition. None of the
//! builders executes anything against the activity log itself.

use uuid::Uuid;

use crate::query::filter::ActivityFilter;
use crate::repository::{FollowGraph, GroupDirectory};
use activity_core_api::FeedResult;

/// Activities performed by the given user.
pub fn from_user(user_id: Uuid) -> ActivityFilter {
    ActivityFilter::FromUser(user_id)
}

/// Activities about the given user.
pub fn about_user(user_id: Uuid) -> ActivityFilter {
    ActivityFilter::AboutObject(user_id)
}

/// Activities about the given dataset.
pub fn about_package(package_id: Uuid) -> ActivityFilter {
    ActivityFilter::AboutObject(package_id)
}

/// Activities about the given group or about any of its datasets.
///
/// A group that does not exist yields [`ActivityFilter::MatchNone`]: asking
/// for the feed of a missing entity produces an empty feed, not an error. A
/// group with no datasets narrows to activities about the group itself.
pub async fn about_group(
    directory: &dyn GroupDirectory,
    group_id: Uuid,
) -> FeedResult<ActivityFilter> {
    if !directory.group_exists(group_id).await? {
        return Ok(ActivityFilter::MatchNone);
    }
    let datasets = directory.datasets_of(group_id).await?;
    if datasets.is_empty() {
        return Ok(ActivityFilter::AboutObject(group_id));
    }
    Ok(ActivityFilter::AnyOf(vec![
        ActivityFilter::AboutObject(group_id),
        ActivityFilter::AboutObjects(datasets),
    ]))
}

/// Union terms covering everything the given user follows: activities
/// authored by followed users, about followed datasets, and about followed
/// groups. Group terms are built one per followed group, in iteration order.
///
/// A user that follows no groups contributes no group term at all; the other
/// two terms are always present, and resolve to match-nothing filters when
/// their follow sets are empty.
pub async fn everything_followed_terms(
    follow_graph: &dyn FollowGraph,
    directory: &dyn GroupDirectory,
    user_id: Uuid,
) -> FeedResult<Vec<ActivityFilter>> {
    let mut terms = vec![
        ActivityFilter::FromUsers(follow_graph.followed_users(user_id).await?),
        ActivityFilter::AboutObjects(follow_graph.followed_datasets(user_id).await?),
    ];
    for group_id in follow_graph.followed_groups(user_id).await? {
        terms.push(about_group(directory, group_id).await?);
    }
    Ok(terms)
}

/// Activities whose type ends with the literal suffix `"package"`, which
/// selects `new_package`, `changed_package`, `deleted_package` and kin.
pub fn changed_packages() -> ActivityFilter {
    ActivityFilter::type_ends_with("package")
}
