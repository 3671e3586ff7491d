pub mod activity_repository;
pub mod activity_store;
pub mod db_init;
