use std::sync::Arc;

use sqlx::PgPool;

/// PostgreSQL-backed implementation of the feed query engine.
///
/// Holds a pool handle; each call checks a connection out for its own
/// duration, so no database session outlives the operation that needed it.
pub struct PgActivityStore {
    pub(crate) pool: Arc<PgPool>,
}

impl PgActivityStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}
