pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{MetadataLocks, SeriesMetadata};
pub use repository::SeriesMetadataRepository;
pub use value_objects::{ReadingDirection, SeriesStatus};
