/// Conversion between series_metadata rows and the SeriesMetadata aggregate
///
/// Timestamps are stored as UTC wall-clock values and handed back in the
/// local time zone.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::modules::series_metadata::domain::{
    entities::{MetadataLocks, SeriesMetadata},
    value_objects::{ReadingDirection, SeriesStatus},
};
use crate::modules::series_metadata::infrastructure::models::*;
use crate::shared::errors::{AppError, AppResult};

/// Assemble the aggregate from its parent row and child values.
///
/// Fails with `InvalidData` when a stored enum string is not a known name.
pub fn model_to_entity(
    model: SeriesMetadataModel,
    genres: Vec<String>,
    tags: Vec<String>,
) -> AppResult<SeriesMetadata> {
    let status = model.status.parse::<SeriesStatus>().map_err(|e| {
        AppError::InvalidData(format!("series {}: {}", model.series_id, e))
    })?;

    let reading_direction = model
        .reading_direction
        .as_deref()
        .map(str::parse::<ReadingDirection>)
        .transpose()
        .map_err(|e| AppError::InvalidData(format!("series {}: {}", model.series_id, e)))?;

    Ok(SeriesMetadata {
        series_id: model.series_id,
        status,
        title: model.title,
        title_sort: model.title_sort,
        summary: model.summary,
        reading_direction,
        publisher: model.publisher,
        age_rating: model.age_rating,
        language: model.language,
        genres: genres.into_iter().collect(),
        tags: tags.into_iter().collect(),
        locks: MetadataLocks {
            status_lock: model.status_lock,
            title_lock: model.title_lock,
            title_sort_lock: model.title_sort_lock,
            summary_lock: model.summary_lock,
            reading_direction_lock: model.reading_direction_lock,
            publisher_lock: model.publisher_lock,
            age_rating_lock: model.age_rating_lock,
            language_lock: model.language_lock,
            genres_lock: model.genres_lock,
            tags_lock: model.tags_lock,
        },
        created_date: to_local(model.created_date),
        last_modified_date: to_local(model.last_modified_date),
    })
}

pub fn entity_to_new_model(entity: &SeriesMetadata) -> NewSeriesMetadata {
    let locks = entity.locks;
    NewSeriesMetadata {
        series_id: entity.series_id.clone(),
        status: entity.status.as_str().to_string(),
        title: entity.title.clone(),
        title_sort: entity.title_sort.clone(),
        summary: entity.summary.clone(),
        reading_direction: entity.reading_direction.map(|d| d.as_str().to_string()),
        publisher: entity.publisher.clone(),
        age_rating: entity.age_rating,
        language: entity.language.clone(),
        status_lock: locks.status_lock,
        title_lock: locks.title_lock,
        title_sort_lock: locks.title_sort_lock,
        summary_lock: locks.summary_lock,
        reading_direction_lock: locks.reading_direction_lock,
        publisher_lock: locks.publisher_lock,
        age_rating_lock: locks.age_rating_lock,
        language_lock: locks.language_lock,
        genres_lock: locks.genres_lock,
        tags_lock: locks.tags_lock,
        created_date: to_storage(entity.created_date),
        last_modified_date: to_storage(entity.last_modified_date),
    }
}

/// Changeset for a full overwrite; the caller's `last_modified_date` is ignored.
pub fn entity_to_changeset(
    entity: &SeriesMetadata,
    last_modified_date: NaiveDateTime,
) -> SeriesMetadataChangeset {
    let locks = entity.locks;
    SeriesMetadataChangeset {
        status: entity.status.as_str().to_string(),
        title: entity.title.clone(),
        title_sort: entity.title_sort.clone(),
        summary: entity.summary.clone(),
        reading_direction: entity.reading_direction.map(|d| d.as_str().to_string()),
        publisher: entity.publisher.clone(),
        age_rating: entity.age_rating,
        language: entity.language.clone(),
        status_lock: locks.status_lock,
        title_lock: locks.title_lock,
        title_sort_lock: locks.title_sort_lock,
        summary_lock: locks.summary_lock,
        reading_direction_lock: locks.reading_direction_lock,
        publisher_lock: locks.publisher_lock,
        age_rating_lock: locks.age_rating_lock,
        language_lock: locks.language_lock,
        genres_lock: locks.genres_lock,
        tags_lock: locks.tags_lock,
        last_modified_date,
    }
}

pub fn genre_rows(entity: &SeriesMetadata) -> Vec<NewSeriesMetadataGenre> {
    entity
        .genres
        .iter()
        .map(|genre| NewSeriesMetadataGenre {
            series_id: entity.series_id.clone(),
            genre: genre.clone(),
        })
        .collect()
}

pub fn tag_rows(entity: &SeriesMetadata) -> Vec<NewSeriesMetadataTag> {
    entity
        .tags
        .iter()
        .map(|tag| NewSeriesMetadataTag {
            series_id: entity.series_id.clone(),
            tag: tag.clone(),
        })
        .collect()
}

pub fn to_local(stored: NaiveDateTime) -> DateTime<Local> {
    Utc.from_utc_datetime(&stored).with_timezone(&Local)
}

pub fn to_storage(date: DateTime<Local>) -> NaiveDateTime {
    date.naive_utc()
}
