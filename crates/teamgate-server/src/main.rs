//! Teamgate Server — application entry point.

use teamgate_auth::AuthConfig;
use teamgate_db::DbManager;
use teamgate_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(bind = %config.bind, "Starting teamgate server");

    let manager = DbManager::connect(&config.db).await?;
    teamgate_db::run_migrations(manager.client()).await?;

    let app = teamgate_server::build_app(
        manager.client().clone(),
        AuthConfig {
            pepper: config.pepper.clone(),
        },
    );

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
