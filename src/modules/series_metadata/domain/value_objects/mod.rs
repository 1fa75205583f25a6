pub mod reading_direction;
pub mod series_status;

pub use reading_direction::ReadingDirection;
pub use series_status::SeriesStatus;
