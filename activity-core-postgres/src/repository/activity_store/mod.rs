pub mod repo_impl;
pub mod fetch_feed;

pub use repo_impl::PgActivityStore;
