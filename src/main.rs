use anyhow::Context;
use clap::Parser;
use tracing::info;

use product_catalog_api::config::{database_url_from_path, AppConfig};
use product_catalog_api::database::Database;
use product_catalog_api::{app, AppState};

#[derive(Parser)]
#[command(name = "product-catalog-api")]
#[command(about = "Product catalog HTTP service")]
#[command(version)]
struct ServerArgs {
    #[arg(long, help = "Port to listen on (overrides PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Database file or sqlite: URL (overrides DATABASE_URL)")]
    db: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = ServerArgs::parse();

    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.db.as_deref() {
        config.database.url = database_url_from_path(path);
    }
    config.validate().context("invalid configuration")?;
    info!("Starting product catalog API in {:?} mode", config.environment);

    let db = Database::connect(&config.database)
        .await
        .context("failed to open database")?;
    db.migrate().await.context("failed to create tables")?;

    let state = AppState::new(db.clone(), &config);
    let router = app(state, &config.security);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
