pub mod models;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use models::*;
pub use query::*;
pub use repository::*;
pub use service::*;
