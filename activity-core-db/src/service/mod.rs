pub mod activity_feed;

// Re-exports
pub use activity_feed::*;
