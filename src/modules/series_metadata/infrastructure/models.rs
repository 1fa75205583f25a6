/// Diesel models for series_metadata and its genre/tag child tables
use crate::schema::{series_metadata, series_metadata_genre, series_metadata_tag};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Row of the series_metadata table
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = series_metadata)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SeriesMetadataModel {
    pub series_id: String,
    pub status: String,
    pub title: Option<String>,
    pub title_sort: Option<String>,
    pub summary: Option<String>,
    pub reading_direction: Option<String>,
    pub publisher: Option<String>,
    pub age_rating: Option<i32>,
    pub language: Option<String>,
    pub status_lock: bool,
    pub title_lock: bool,
    pub title_sort_lock: bool,
    pub summary_lock: bool,
    pub reading_direction_lock: bool,
    pub publisher_lock: bool,
    pub age_rating_lock: bool,
    pub language_lock: bool,
    pub genres_lock: bool,
    pub tags_lock: bool,
    pub created_date: NaiveDateTime,
    pub last_modified_date: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = series_metadata)]
pub struct NewSeriesMetadata {
    pub series_id: String,
    pub status: String,
    pub title: Option<String>,
    pub title_sort: Option<String>,
    pub summary: Option<String>,
    pub reading_direction: Option<String>,
    pub publisher: Option<String>,
    pub age_rating: Option<i32>,
    pub language: Option<String>,
    pub status_lock: bool,
    pub title_lock: bool,
    pub title_sort_lock: bool,
    pub summary_lock: bool,
    pub reading_direction_lock: bool,
    pub publisher_lock: bool,
    pub age_rating_lock: bool,
    pub language_lock: bool,
    pub genres_lock: bool,
    pub tags_lock: bool,
    pub created_date: NaiveDateTime,
    pub last_modified_date: NaiveDateTime,
}

/// Full overwrite of the parent row; `None` writes NULL.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = series_metadata)]
#[diesel(treat_none_as_null = true)]
pub struct SeriesMetadataChangeset {
    pub status: String,
    pub title: Option<String>,
    pub title_sort: Option<String>,
    pub summary: Option<String>,
    pub reading_direction: Option<String>,
    pub publisher: Option<String>,
    pub age_rating: Option<i32>,
    pub language: Option<String>,
    pub status_lock: bool,
    pub title_lock: bool,
    pub title_sort_lock: bool,
    pub summary_lock: bool,
    pub reading_direction_lock: bool,
    pub publisher_lock: bool,
    pub age_rating_lock: bool,
    pub language_lock: bool,
    pub genres_lock: bool,
    pub tags_lock: bool,
    pub last_modified_date: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = series_metadata_genre)]
pub struct NewSeriesMetadataGenre {
    pub series_id: String,
    pub genre: String,
}

#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = series_metadata_tag)]
pub struct NewSeriesMetadataTag {
    pub series_id: String,
    pub tag: String,
}
