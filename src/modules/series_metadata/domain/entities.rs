/// Series metadata aggregate
///
/// One parent record plus the genre and tag sets owned by a series. The
/// aggregate is always persisted and loaded as a single unit.
use chrono::{DateTime, Local, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::value_objects::{ReadingDirection, SeriesStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub series_id: String,

    pub status: SeriesStatus,
    pub title: Option<String>,
    pub title_sort: Option<String>,
    pub summary: Option<String>,
    pub reading_direction: Option<ReadingDirection>,
    pub publisher: Option<String>,
    pub age_rating: Option<i32>,
    pub language: Option<String>,
    pub genres: BTreeSet<String>,
    pub tags: BTreeSet<String>,

    #[serde(flatten)]
    pub locks: MetadataLocks,

    pub created_date: DateTime<Local>,
    pub last_modified_date: DateTime<Local>,
}

/// Fields protected from automatic overwrite by metadata refreshes.
///
/// Stored as-is; honouring them is up to whoever refreshes metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataLocks {
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
}

impl MetadataLocks {
    pub fn all() -> Self {
        Self {
            status_lock: true,
            title_lock: true,
            title_sort_lock: true,
            summary_lock: true,
            reading_direction_lock: true,
            publisher_lock: true,
            age_rating_lock: true,
            language_lock: true,
            genres_lock: true,
            tags_lock: true,
        }
    }
}

impl SeriesMetadata {
    /// New ongoing series with the sort title defaulting to the title.
    ///
    /// Timestamps are truncated to microseconds, the precision they are stored with.
    pub fn new(series_id: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        let now = Local::now().trunc_subsecs(6);

        Self {
            series_id: series_id.into(),
            status: SeriesStatus::default(),
            title_sort: Some(title.clone()),
            title: Some(title),
            summary: None,
            reading_direction: None,
            publisher: None,
            age_rating: None,
            language: None,
            genres: BTreeSet::new(),
            tags: BTreeSet::new(),
            locks: MetadataLocks::default(),
            created_date: now,
            last_modified_date: now,
        }
    }
}
