pub mod repo_impl;
pub mod create_batch;
pub mod create_with_details;
pub mod load_batch;
pub mod exist_by_ids;
pub mod find_details_by_activity_id;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PgActivityRepository;
