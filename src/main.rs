use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use patient_service_api::{app, config, AppState};

#[derive(Parser)]
#[command(name = "patient-service-api")]
#[command(about = "Patient Service API - versioned patient records REST API")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Address to bind (overrides HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up API_JWT_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = config::config().clone();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let state = AppState::new(config).context("failed to initialize application state")?;
    let config = &state.config;

    tracing::info!("Starting Patient Service API in {:?} mode", config.environment);
    if config.security.jwt_secret.is_none() {
        if config.is_production() {
            tracing::error!("API_JWT_SECRET is not set in production; login and v2 endpoints will answer 500");
        } else {
            tracing::warn!("API_JWT_SECRET is not set; login and v2 endpoints will answer 500");
        }
    }
    tracing::info!("Issued tokens expire after {}s", state.tokens.expiry().as_secs());

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Patient Service API running on http://{}", bind_addr);
    tracing::info!("Swagger docs at http://{}/docs", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
