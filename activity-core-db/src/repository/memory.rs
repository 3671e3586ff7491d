//! In-memory implementations of the storage and resolver contracts.
//!
//! The store executes the same union, ordering and windowing semantics as
//! the PostgreSQL engine against rows held in process. It serves as the
//! fixture for the query-layer tests and as a feed engine for embedders
//! that do not want a database.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{Activity, ActivityDetail, Identifiable};
use crate::query::{FeedQuery, PageWindow};
use crate::repository::{ActivityStore, CreateBatch, ExistByIds, FollowGraph, GroupDirectory, LoadBatch};
use activity_core_api::FeedResult;

/// Activity log held in process memory.
pub struct InMemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
    details: RwLock<Vec<ActivityDetail>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self {
            activities: RwLock::new(Vec::new()),
            details: RwLock::new(Vec::new()),
        }
    }

    /// Writes an activity together with its detail rows.
    pub async fn create_with_details(
        &self,
        activity: Activity,
        details: Vec<ActivityDetail>,
    ) -> FeedResult<(Activity, Vec<ActivityDetail>)> {
        self.activities.write().push(activity.clone());
        self.details.write().extend(details.iter().cloned());
        Ok((activity, details))
    }

    /// Detail rows belonging to one activity.
    pub fn details_of(&self, activity_id: Uuid) -> Vec<ActivityDetail> {
        self.details
            .read()
            .iter()
            .filter(|detail| detail.activity_id == activity_id)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn fetch_feed(&self, query: &FeedQuery, window: PageWindow) -> FeedResult<Vec<Activity>> {
        let mut page: Vec<Activity> = {
            let rows = self.activities.read();
            rows.iter().filter(|row| query.matches(row)).cloned().collect()
        };
        // Shared ordering contract: newest first, id breaks timestamp ties.
        page.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));

        let skip = window.offset().unwrap_or(0) as usize;
        let page = match window.limit() {
            Some(limit) => page.into_iter().skip(skip).take(limit as usize).collect(),
            None => page.into_iter().skip(skip).collect(),
        };
        Ok(page)
    }
}

#[async_trait]
impl CreateBatch<Activity> for InMemoryActivityStore {
    async fn create_batch(&self, items: Vec<Activity>) -> FeedResult<Vec<Activity>> {
        self.activities.write().extend(items.iter().cloned());
        Ok(items)
    }
}

#[async_trait]
impl LoadBatch<Activity> for InMemoryActivityStore {
    async fn load_batch(&self, ids: &[Uuid]) -> FeedResult<Vec<Option<Activity>>> {
        let rows = self.activities.read();
        let by_id: HashMap<Uuid, &Activity> =
            rows.iter().map(|row| (row.get_id(), row)).collect();
        Ok(ids.iter().map(|id| by_id.get(id).map(|row| (*row).clone())).collect())
    }
}

#[async_trait]
impl ExistByIds for InMemoryActivityStore {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> FeedResult<Vec<(Uuid, bool)>> {
        let rows = self.activities.read();
        let known: std::collections::HashSet<Uuid> =
            rows.iter().map(|row| row.get_id()).collect();
        Ok(ids.iter().map(|id| (*id, known.contains(id))).collect())
    }
}

/// Follow relationships held as explicit adjacency maps.
pub struct InMemoryFollowGraph {
    users: RwLock<HashMap<Uuid, Vec<Uuid>>>,
    datasets: RwLock<HashMap<Uuid, Vec<Uuid>>>,
    groups: RwLock<HashMap<Uuid, Vec<Uuid>>>,
}

impl InMemoryFollowGraph {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            datasets: RwLock::new(HashMap::new()),
            groups: RwLock::new(HashMap::new()),
        }
    }

    pub fn follow_user(&self, follower: Uuid, followee: Uuid) {
        self.users.write().entry(follower).or_default().push(followee);
    }

    pub fn follow_dataset(&self, follower: Uuid, dataset_id: Uuid) {
        self.datasets.write().entry(follower).or_default().push(dataset_id);
    }

    pub fn follow_group(&self, follower: Uuid, group_id: Uuid) {
        self.groups.write().entry(follower).or_default().push(group_id);
    }
}

impl Default for InMemoryFollowGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FollowGraph for InMemoryFollowGraph {
    async fn followed_users(&self, user_id: Uuid) -> FeedResult<Vec<Uuid>> {
        Ok(self.users.read().get(&user_id).cloned().unwrap_or_default())
    }

    async fn followed_datasets(&self, user_id: Uuid) -> FeedResult<Vec<Uuid>> {
        Ok(self.datasets.read().get(&user_id).cloned().unwrap_or_default())
    }

    async fn followed_groups(&self, user_id: Uuid) -> FeedResult<Vec<Uuid>> {
        Ok(self.groups.read().get(&user_id).cloned().unwrap_or_default())
    }
}

/// Group membership held as an explicit map.
pub struct InMemoryGroupDirectory {
    groups: RwLock<HashMap<Uuid, Vec<Uuid>>>,
}

impl InMemoryGroupDirectory {
    pub fn new() -> Self {
        Self { groups: RwLock::new(HashMap::new()) }
    }

    /// Registers a group and the datasets it contains.
    pub fn add_group(&self, group_id: Uuid, datasets: Vec<Uuid>) {
        self.groups.write().insert(group_id, datasets);
    }
}

impl Default for InMemoryGroupDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupDirectory for InMemoryGroupDirectory {
    async fn group_exists(&self, group_id: Uuid) -> FeedResult<bool> {
        Ok(self.groups.read().contains_key(&group_id))
    }

    async fn datasets_of(&self, group_id: Uuid) -> FeedResult<Vec<Uuid>> {
        Ok(self.groups.read().get(&group_id).cloned().unwrap_or_default())
    }
}
