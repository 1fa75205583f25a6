pub mod mapper;
pub mod models;
pub mod repository;

pub use repository::SeriesMetadataRepositoryImpl;
