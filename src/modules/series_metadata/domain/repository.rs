/// Repository trait for series metadata persistence
///
/// Each write runs in its own transaction spanning the parent row and both
/// child tables.
use crate::modules::series_metadata::domain::entities::SeriesMetadata;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait SeriesMetadataRepository: Send + Sync {
    /// Load the aggregate, failing with `AppError::NotFound` when absent
    async fn find_by_id(&self, series_id: &str) -> AppResult<SeriesMetadata>;

    /// Load the aggregate, or `None` when no parent row exists
    async fn find_by_id_or_none(&self, series_id: &str) -> AppResult<Option<SeriesMetadata>>;

    /// Insert parent row, genres and tags. A duplicate id surfaces the
    /// storage uniqueness violation.
    async fn insert(&self, metadata: &SeriesMetadata) -> AppResult<()>;

    /// Replace the stored aggregate. `last_modified_date` is stamped by the
    /// store; an unknown id updates nothing and still succeeds.
    async fn update(&self, metadata: &SeriesMetadata) -> AppResult<()>;

    async fn delete(&self, series_id: &str) -> AppResult<()>;

    async fn delete_many(&self, series_ids: &[String]) -> AppResult<()>;

    /// Number of stored aggregates
    async fn count(&self) -> AppResult<i64>;
}
