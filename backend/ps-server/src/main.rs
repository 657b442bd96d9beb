use ps_db::{ConnectionSettings, PersonRepository};
use ps_server::{AppState, build_gate, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

const DATABASE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ps_config::Config::load()?;
    config.validate()?;

    // Log file lives under <config dir>/<logging.dir>
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ps-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // A configured key that does not decode is fatal
    let gate = build_gate(&config.security)?;
    if !gate.is_enabled() {
        warn!("Bearer gate DISABLED - /api/v1 routes accept unauthenticated requests");
    }

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = ps_db::connect(
        &database_path,
        ConnectionSettings {
            max_connections: config.database.max_connections,
            busy_timeout: DATABASE_BUSY_TIMEOUT,
        },
    )
    .await?;

    info!("Running database migrations...");
    ps_db::migrate(&pool).await?;
    info!("Migrations complete");

    let persons =
        PersonRepository::new(pool.clone()).with_query_timeout(config.database.query_timeout());

    // Build router
    let state =
        AppState::new(persons, gate).with_request_timeout(config.server.request_timeout());
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
