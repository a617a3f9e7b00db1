//! Backend entry-point: wires the legacy menu API over HTTP.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use menu_backend::inbound::http::HealthState;
use menu_backend::outbound::persistence::DbPool;
use menu_backend::server::{create_server, ServerConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

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

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = match env::var("DB_POOL_MAX_SIZE") {
                Ok(size) => {
                    let max_connections = size.parse().map_err(|e| {
                        std::io::Error::other(format!("invalid DB_POOL_MAX_SIZE: {e}"))
                    })?;
                    DbPool::connect_with_size(&url, max_connections).await
                }
                Err(_) => DbPool::connect(&url).await,
            }
            .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; serving deterministic fixtures");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
