pub mod series_metadata;
