pub mod activity_store;
pub mod create_batch;
pub mod exist_by_ids;
pub mod follow_graph;
pub mod group_directory;
pub mod load_batch;
pub mod memory;

// Re-exports
pub use activity_store::*;
pub use create_batch::*;
pub use exist_by_ids::*;
pub use follow_graph::*;
pub use group_directory::*;
pub use load_batch::*;
pub use memory::*;
