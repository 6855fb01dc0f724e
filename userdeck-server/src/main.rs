//! # UserDeck Server
//!
//! In-memory REST backend for the UserDeck panel.
//!
//! Records live only for the lifetime of the process; there is no
//! database behind this service. Bind address and port come from CLI
//! flags or the environment (`USERDECK_HOST` / `USERDECK_PORT`), with
//! `.env` files honored for development.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userdeck_server::{AppState, create_router};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "userdeck-server")]
#[command(about = "In-memory REST backend for the UserDeck panel")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "USERDECK_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "USERDECK_PORT", default_value_t = 4000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port combination")?;

    let state = AppState::new();
    let router = create_router(state);

    info!("Starting UserDeck server (HTTP) on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
