/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{Duration, Local, SubsecRound};
use shelf_lib::modules::series_metadata::{
    MetadataLocks, ReadingDirection, SeriesMetadata, SeriesStatus,
};

pub struct SeriesMetadataFactory {
    series_id: String,
    title: String,
    status: SeriesStatus,
    summary: Option<String>,
    reading_direction: Option<ReadingDirection>,
    publisher: Option<String>,
    age_rating: Option<i32>,
    language: Option<String>,
    genres: Vec<String>,
    tags: Vec<String>,
    locks: MetadataLocks,
}

impl Default for SeriesMetadataFactory {
    fn default() -> Self {
        Self {
            series_id: uuid::Uuid::new_v4().to_string(),
            title: "Test Series".to_string(),
            status: SeriesStatus::Ongoing,
            summary: None,
            reading_direction: None,
            publisher: None,
            age_rating: None,
            language: None,
            genres: Vec::new(),
            tags: Vec::new(),
            locks: MetadataLocks::default(),
        }
    }
}

impl SeriesMetadataFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, series_id: &str) -> Self {
        self.series_id = series_id.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_status(mut self, status: SeriesStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_reading_direction(mut self, direction: ReadingDirection) -> Self {
        self.reading_direction = Some(direction);
        self
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Populate every nullable scalar
    pub fn fully_described(mut self) -> Self {
        self.summary = Some("A mercenary and his band.".to_string());
        self.publisher = Some("Hakusensha".to_string());
        self.age_rating = Some(18);
        self.language = Some("ja".to_string());
        self.reading_direction = Some(ReadingDirection::RightToLeft);
        self
    }

    pub fn with_locks(mut self, locks: MetadataLocks) -> Self {
        self.locks = locks;
        self
    }

    pub fn build(self) -> SeriesMetadata {
        let mut metadata = SeriesMetadata::new(self.series_id, self.title);
        metadata.status = self.status;
        metadata.summary = self.summary;
        metadata.reading_direction = self.reading_direction;
        metadata.publisher = self.publisher;
        metadata.age_rating = self.age_rating;
        metadata.language = self.language;
        metadata.genres = self.genres.into_iter().collect();
        metadata.tags = self.tags.into_iter().collect();
        metadata.locks = self.locks;
        // Distinct, storage-precision timestamps so round trips can be compared exactly
        metadata.created_date = (Local::now() - Duration::days(3)).trunc_subsecs(6);
        metadata.last_modified_date = (Local::now() - Duration::days(1)).trunc_subsecs(6);
        metadata
    }
}
