use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use tower_http::services::ServeDir;
use tracing::info;

/// Preview a built site directory over HTTP.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// directory produced by shsm-build
    #[arg(short, long, default_value = "dist")]
    dir: PathBuf,

    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    let app = Router::new().fallback_service(ServeDir::new(&cli.dir));

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("serving {} on http://{addr}", cli.dir.display());
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
