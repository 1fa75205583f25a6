pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::series_metadata::SeriesMetadataRepositoryImpl;
use shared::{errors::AppResult, utils::init_logger, Database};

/// Connect from the environment, apply pending migrations and build the
/// series metadata repository.
pub fn bootstrap() -> AppResult<SeriesMetadataRepositoryImpl> {
    init_logger();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    let status = database.pool_status();
    log_info!(
        "Series metadata store ready ({} of {} connections open, {} idle)",
        status.connections,
        status.max_size,
        status.idle_connections
    );

    Ok(SeriesMetadataRepositoryImpl::new(database))
}
