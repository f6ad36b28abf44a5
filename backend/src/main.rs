//! Service entry-point: loads configuration, opens the record store, and
//! serves the user record API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use usuarios::config::{DatabaseSettings, ListenSettings, load_env_file};
use usuarios::inbound::http::health::HealthState;
use usuarios::outbound::persistence::{DbPool, PoolConfig};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match load_env_file().map_err(std::io::Error::other)? {
        Some(path) => info!(path = %path.display(), "loaded env file"),
        None => info!("no env file found; using process environment"),
    }

    let listen = ListenSettings::from_env().map_err(std::io::Error::other)?;
    let database = DatabaseSettings::load().map_err(|e| {
        std::io::Error::other(format!("failed to load database settings: {e}"))
    })?;

    let mut config = ServerConfig::new(listen.bind_addr());
    if database.is_configured() {
        let url = database.database_url().map_err(std::io::Error::other)?;
        let pool_config = PoolConfig::new(url)
            .with_max_size(database.pool_max_size())
            .with_connection_timeout(database.pool_connection_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        info!(host = database.host(), port = database.port, "database pool ready");
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(port = listen.port(), "listening");
    server.await
}
