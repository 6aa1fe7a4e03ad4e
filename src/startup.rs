//! Application startup - seeding and state assembly.
//!
//! The binary calls these once, in order, before serving requests.

use crate::{
    api::AppState,
    config::{Settings, UserStore, database},
    core::{employee as service, store},
    entities::EmployeeModel,
    errors::Result,
    loader::LoaderRegistry,
};
use sea_orm::DatabaseConnection;
use std::path::Path;
use tracing::{error, info, instrument, warn};

/// Loads `path` through `registry` and saves every produced record.
///
/// An unregistered extension is returned as an error. A strategy that
/// produced nothing (including after a decode failure) saves nothing.
#[instrument(skip(db, registry))]
pub async fn seed_from_file(
    db: &DatabaseConnection,
    registry: &LoaderRegistry,
    path: &Path,
) -> Result<Vec<EmployeeModel>> {
    let records = registry
        .load(path)
        .inspect_err(|e| error!("Seeding aborted: {}", e))?;

    if records.is_empty() {
        warn!("Seed file {:?} produced no employees", path);
        return Ok(Vec::new());
    }

    let saved = service::save_many(db, records).await?;
    info!("Seeded {} employees from {:?}", saved.len(), path);
    Ok(saved)
}

/// Connects to the database, creates tables, seeds and builds the API state.
pub async fn build_state(
    settings: &Settings,
    database_url: &str,
    registry: &LoaderRegistry,
    users: UserStore,
) -> Result<AppState> {
    let db = database::create_connection(database_url).await?;
    database::create_tables(&db).await?;

    if !settings.seed_on_startup {
        info!("Seeding disabled");
    } else if store::is_empty(&db).await? {
        seed_from_file(&db, registry, &settings.seed_path).await?;
    } else {
        info!("Employee table already populated, skipping seed");
    }

    Ok(AppState::new(db, users))
}
