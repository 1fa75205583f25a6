/// Series metadata persistence
///
/// Stores the `SeriesMetadata` aggregate (parent row plus genre and tag sets)
/// in PostgreSQL.
///
/// Architecture:
/// - Domain: aggregate, status/reading-direction value objects, repository trait
/// - Infrastructure: Diesel models, row mapping and the repository implementation
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{
    MetadataLocks, ReadingDirection, SeriesMetadata, SeriesMetadataRepository, SeriesStatus,
};
pub use infrastructure::SeriesMetadataRepositoryImpl;
