//! millerd - HTTP service for Miller index notation parsing
//!
//! Accepts notation strings like `(100)` and `[111]` over a single JSON
//! endpoint and returns their structured decomposition for the
//! visualization frontend.

mod api;

use std::net::SocketAddr;

use clap::Parser;
use miller_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// millerd: Miller index notation parsing service
#[derive(Parser, Debug)]
#[command(name = "millerd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on (overrides config and env)
    #[arg(short, long, env = "MILLER_PORT")]
    port: Option<u16>,

    /// Origin allowed by CORS (overrides config and env)
    #[arg(long, env = "MILLER_CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::load_with_overrides(cli.port, cli.cors_origin.clone())?;

    if cli.verbose {
        tracing::info!(
            port = config.server.port,
            cors_origin = %config.server.cors_origin,
            "Configuration loaded"
        );
    }

    let app = api::router(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "millerd listening");

    axum::serve(listener, app).await?;

    Ok(())
}
