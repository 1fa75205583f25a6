/// Diesel-based implementation of SeriesMetadataRepository
///
/// The aggregate spans three tables: `series_metadata` (parent) and the
/// `series_metadata_genre` / `series_metadata_tag` child tables. Writes run in
/// one transaction each; child rows are always deleted before the parent.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use diesel::prelude::*;
use tokio::task;

use crate::modules::series_metadata::domain::{
    entities::SeriesMetadata, repository::SeriesMetadataRepository,
};
use crate::modules::series_metadata::infrastructure::{mapper, models::SeriesMetadataModel};
use crate::schema::{series_metadata, series_metadata_genre, series_metadata_tag};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::shared::Database;
use crate::{log_debug, log_warn};

/// Child rows per INSERT; two bind parameters each keeps a statement well
/// under the Postgres limit of 65535 parameters.
const CHILD_ROWS_PER_INSERT: usize = 10_000;

pub struct SeriesMetadataRepositoryImpl {
    db: Arc<Database>,
}

impl SeriesMetadataRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Read parent and child rows from one repeatable-read snapshot so a
    /// concurrent update or delete is seen either entirely or not at all.
    fn load(conn: &mut PgConnection, series_id: &str) -> AppResult<Option<SeriesMetadata>> {
        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run(|conn| Self::load_in_snapshot(conn, series_id))
    }

    fn load_in_snapshot(
        conn: &mut PgConnection,
        series_id: &str,
    ) -> AppResult<Option<SeriesMetadata>> {
        let model = series_metadata::table
            .find(series_id)
            .select(SeriesMetadataModel::as_select())
            .first::<SeriesMetadataModel>(conn)
            .optional()?;

        let Some(model) = model else {
            return Ok(None);
        };

        let genres = series_metadata_genre::table
            .filter(series_metadata_genre::series_id.eq(series_id))
            .select(series_metadata_genre::genre)
            .load::<String>(conn)?;

        let tags = series_metadata_tag::table
            .filter(series_metadata_tag::series_id.eq(series_id))
            .select(series_metadata_tag::tag)
            .load::<String>(conn)?;

        mapper::model_to_entity(model, genres, tags).map(Some)
    }

    /// Insert child rows for the aggregate; empty sets insert nothing.
    fn insert_children(conn: &mut PgConnection, metadata: &SeriesMetadata) -> AppResult<()> {
        for genres in mapper::genre_rows(metadata).chunks(CHILD_ROWS_PER_INSERT) {
            diesel::insert_into(series_metadata_genre::table)
                .values(genres)
                .execute(conn)?;
        }

        for tags in mapper::tag_rows(metadata).chunks(CHILD_ROWS_PER_INSERT) {
            diesel::insert_into(series_metadata_tag::table)
                .values(tags)
                .execute(conn)?;
        }

        Ok(())
    }

    fn delete_children(conn: &mut PgConnection, series_ids: &[String]) -> AppResult<()> {
        diesel::delete(
            series_metadata_genre::table.filter(series_metadata_genre::series_id.eq_any(series_ids)),
        )
        .execute(conn)?;

        diesel::delete(
            series_metadata_tag::table.filter(series_metadata_tag::series_id.eq_any(series_ids)),
        )
        .execute(conn)?;

        Ok(())
    }

    /// Delete genres, tags, then parent rows for every id in one transaction.
    fn delete_aggregates(conn: &mut PgConnection, series_ids: &[String]) -> AppResult<usize> {
        conn.transaction::<usize, AppError, _>(|conn| {
            Self::delete_children(conn, series_ids)?;

            let deleted = diesel::delete(
                series_metadata::table.filter(series_metadata::series_id.eq_any(series_ids)),
            )
            .execute(conn)?;

            Ok(deleted)
        })
    }
}

#[async_trait]
impl SeriesMetadataRepository for SeriesMetadataRepositoryImpl {
    async fn find_by_id(&self, series_id: &str) -> AppResult<SeriesMetadata> {
        self.find_by_id_or_none(series_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Series metadata not found for series {}", series_id))
        })
    }

    async fn find_by_id_or_none(&self, series_id: &str) -> AppResult<Option<SeriesMetadata>> {
        let db = Arc::clone(&self.db);
        let series_id = series_id.to_string();

        task::spawn_blocking(move || -> AppResult<Option<SeriesMetadata>> {
            let timer = TimedOperation::new("find_by_id", "series_metadata");
            let mut conn = db.get_connection()?;
            let found = Self::load(&mut conn, &series_id)?;
            timer.finish();
            Ok(found)
        })
        .await?
    }

    async fn insert(&self, metadata: &SeriesMetadata) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let metadata = metadata.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("insert", "series_metadata");
            let mut conn = db.get_connection()?;

            conn.transaction::<(), AppError, _>(|conn| {
                diesel::insert_into(series_metadata::table)
                    .values(&mapper::entity_to_new_model(&metadata))
                    .execute(conn)?;

                Self::insert_children(conn, &metadata)
            })?;

            log_debug!(
                "Inserted metadata for series {} ({} genres, {} tags)",
                metadata.series_id,
                metadata.genres.len(),
                metadata.tags.len()
            );
            timer.finish();
            Ok(())
        })
        .await?
    }

    async fn update(&self, metadata: &SeriesMetadata) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let metadata = metadata.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("update", "series_metadata");
            let mut conn = db.get_connection()?;
            let last_modified_date = Utc::now().naive_utc().trunc_subsecs(6);

            let updated = conn.transaction::<usize, AppError, _>(|conn| {
                let changeset = mapper::entity_to_changeset(&metadata, last_modified_date);
                let updated =
                    diesel::update(series_metadata::table.find(metadata.series_id.as_str()))
                        .set(&changeset)
                        .execute(conn)?;

                // Without a parent row there is nothing to replace; child rows
                // would violate the foreign key.
                if updated == 0 {
                    return Ok(0);
                }

                Self::delete_children(conn, std::slice::from_ref(&metadata.series_id))?;
                Self::insert_children(conn, &metadata)?;

                Ok(updated)
            })?;

            if updated == 0 {
                log_warn!(
                    "Update matched no metadata row for series {}",
                    metadata.series_id
                );
            }
            timer.finish();
            Ok(())
        })
        .await?
    }

    async fn delete(&self, series_id: &str) -> AppResult<()> {
        self.delete_many(&[series_id.to_string()]).await
    }

    async fn delete_many(&self, series_ids: &[String]) -> AppResult<()> {
        if series_ids.is_empty() {
            return Ok(());
        }

        let db = Arc::clone(&self.db);
        let series_ids = series_ids.to_vec();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("delete", "series_metadata");
            let mut conn = db.get_connection()?;
            let deleted = Self::delete_aggregates(&mut conn, &series_ids)?;

            log_debug!(
                "Deleted {} of {} requested series metadata rows",
                deleted,
                series_ids.len()
            );
            timer.finish();
            Ok(())
        })
        .await?
    }

    async fn count(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let timer = TimedOperation::new("count", "series_metadata");
            let mut conn = db.get_connection()?;
            let total = series_metadata::table.count().get_result::<i64>(&mut conn)?;
            timer.finish();
            Ok(total)
        })
        .await?
    }
}
