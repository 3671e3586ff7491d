pub mod postgres_stores;
pub mod repository;
pub mod sql;
pub mod utils;

pub use postgres_stores::PostgresStores;
pub use repository::activity_repository::PgActivityRepository;
pub use repository::activity_store::PgActivityStore;

#[cfg(test)]
pub mod test_helper;
