//! Dashboard HTTP Server Binary
//!
//! Loads the rental tables, sets up the HTTP router and starts serving.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dashboard-server
//! DASHBOARD_CONFIG=/etc/dashboard.toml cargo run --bin dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path of the TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8501)
//! - `DASHBOARD_DAILY_CSV`, `DASHBOARD_HOURLY_CSV`, `DASHBOARD_LOGO`: Input paths
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bikeshare_dashboard::config::DashboardConfig;
use bikeshare_dashboard::http::{create_router, AppState};
use bikeshare_dashboard::io::DatasetLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting bike sharing dashboard");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // Any load failure stops the server before it binds
    let dataset = DatasetLoader::load(&config.data.daily_csv, &config.data.hourly_csv)
        .with_context(|| {
            format!(
                "Failed to load rental data from {} and {}",
                config.data.daily_csv.display(),
                config.data.hourly_csv.display()
            )
        })?;

    if !config.data.logo.exists() {
        tracing::warn!(path = %config.data.logo.display(), "Logo file not found");
    }

    let state = AppState::new(dataset, config.data.logo.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
