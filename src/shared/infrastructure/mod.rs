/// Shared infrastructure concerns
pub mod config;
pub mod database;

// Re-exports for convenience
pub use config::DatabaseConfig;
pub use database::{Database, DbConnection, DbPool, PoolStatus};
