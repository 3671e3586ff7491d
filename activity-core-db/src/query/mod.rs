pub mod builders;
pub mod composer;
pub mod feed_query;
pub mod filter;
pub mod window;

// Re-exports
pub use feed_query::*;
pub use filter::*;
pub use window::*;
