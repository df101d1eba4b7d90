//! Vacation Entitlement Engine server binary.
//!
//! Loads a vacation policy directory (or the built-in statutory schedule) and
//! serves the balance API over HTTP.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::config::ConfigLoader;

#[derive(Parser)]
#[command(author, version, about = "Vacation entitlement and balance server")]
struct Cli {
    /// Directory holding policy.yaml and entitlements.yaml.
    #[arg(short, long, default_value = "./config/lft")]
    config: PathBuf,

    /// Ignore --config and serve the built-in statutory schedule.
    #[arg(long)]
    statutory: bool,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let config = if cli.statutory {
        ConfigLoader::statutory()
    } else {
        ConfigLoader::load(&cli.config)
            .with_context(|| format!("failed to load policy from {}", cli.config.display()))?
    };

    tracing::info!(
        policy = %config.policy().code,
        version = %config.policy().version,
        tiers = config.table().tiers().len(),
        "Starting vacation engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    let app = create_router(AppState::new(config));
    let address = format!("{}:{}", cli.host, cli.port);

    tracing::info!("Listening on http://{address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
