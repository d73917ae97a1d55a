use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;
use visioncine_core::VisioncineScraper;
use visioncine_server::{AppState, Config, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let scraper = VisioncineScraper::with_config(config.client_config())?;
    let state = AppState::new(scraper, config.environment.clone());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    tracing::info!(
        port = config.port,
        environment = %config.environment,
        "starting VisionCine API"
    );

    run_server(addr, state).await
}
