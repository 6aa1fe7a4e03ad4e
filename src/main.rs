use employee_roster::{
    api,
    config::{Settings, UserStore, database},
    errors::Result,
    loader::LoaderRegistry,
    startup,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load settings and API users
    let settings = Settings::load().inspect_err(|e| error!("Failed to load settings: {}", e))?;
    let users =
        UserStore::from_env().inspect_err(|e| error!("Failed to configure API users: {}", e))?;

    // 4. Register seed loaders once, before first use
    let registry = LoaderRegistry::with_defaults();
    info!("Loader registry ready: {:?}", registry);

    // 5. Connect, create tables and seed
    let database_url = database::get_database_url();
    let state = startup::build_state(&settings, &database_url, &registry, users)
        .await
        .inspect(|_| info!("Startup complete."))
        .inspect_err(|e| error!("Startup failed: {}", e))?;

    // 6. Serve until shutdown
    api::serve(&settings.bind_address, state).await
}
