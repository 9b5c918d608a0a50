use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Healthcare glossary translator with a QR landing page")]
struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// URL the landing page QR code points at.
    #[arg(long, env = "YLKF_DOMAIN_URL", default_value = ylkf_landing_server::DEFAULT_DOMAIN_URL)]
    domain_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let app = Router::new()
        .merge(ylkf_landing_server::create_router(&cli.domain_url)?)
        .merge(ylkf_translate_server::create_router())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", cli.host, cli.port))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
