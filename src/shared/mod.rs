pub mod errors;
pub mod infrastructure;
pub mod utils;

// Re-exports for convenience
pub use infrastructure::{Database, DatabaseConfig};
