//! Declarative filter expressions over the activity log.
//!
//! A filter is plain data: building one never touches the store, and the
//! same inputs always yield the same expression. Execution belongs to the
//! [`ActivityStore`](crate::repository::ActivityStore) implementations,
//! which interpret the tree against their backing representation.

use uuid::Uuid;

use crate::models::Activity;

/// A predicate selecting a subset of the activity log.
///
/// Variants either test a single column or combine sub-filters. An empty id
/// list matches no rows; [`ActivityFilter::MatchNone`] matches no rows
/// unconditionally and marks feeds of entities that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityFilter {
    /// Matches no rows at all.
    MatchNone,
    /// Activities performed by this actor.
    FromUser(Uuid),
    /// Activities performed by any of these actors.
    FromUsers(Vec<Uuid>),
    /// Activities about this entity.
    AboutObject(Uuid),
    /// Activities about any of these entities.
    AboutObjects(Vec<Uuid>),
    /// Activities whose type ends with this literal suffix.
    TypeEndsWith(String),
    /// Activities matching at least one of the sub-filters.
    AnyOf(Vec<ActivityFilter>),
}

impl ActivityFilter {
    /// Filter on a literal `activity_type` suffix, e.g. `"package"`.
    pub fn type_ends_with(suffix: &str) -> Self {
        ActivityFilter::TypeEndsWith(suffix.to_string())
    }

    /// Evaluates this filter against one activity row.
    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            ActivityFilter::MatchNone => false,
            ActivityFilter::FromUser(id) => activity.user_id == *id,
            ActivityFilter::FromUsers(ids) => ids.contains(&activity.user_id),
            ActivityFilter::AboutObject(id) => activity.object_id == *id,
            ActivityFilter::AboutObjects(ids) => ids.contains(&activity.object_id),
            ActivityFilter::TypeEndsWith(suffix) => {
                activity.activity_type.ends_with(suffix.as_str())
            }
            ActivityFilter::AnyOf(filters) => filters.iter().any(|f| f.matches(activity)),
        }
    }
}
