//! Wiring for the PostgreSQL-backed components.

use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::activity_repository::PgActivityRepository;
use crate::repository::activity_store::PgActivityStore;

/// Builds the PostgreSQL-backed stores over one shared connection pool.
///
/// Handles are cheap to create; they share the pool and hold no other
/// state.
pub struct PostgresStores {
    pool: Arc<PgPool>,
}

impl PostgresStores {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// The feed query engine.
    pub fn activity_store(&self) -> Arc<PgActivityStore> {
        Arc::new(PgActivityStore::new(self.pool.clone()))
    }

    /// Row-level log access for producers and admin tooling.
    pub fn activity_repository(&self) -> Arc<PgActivityRepository> {
        Arc::new(PgActivityRepository::new(self.pool.clone()))
    }
}
