pub mod activity;
pub mod activity_detail;

// Re-exports
pub use activity::*;
pub use activity_detail::*;

use uuid::Uuid;

/// Trait for rows addressed by a UUID primary key.
pub trait Identifiable {
    /// Returns the unique identifier of the row.
    fn get_id(&self) -> Uuid;
}
