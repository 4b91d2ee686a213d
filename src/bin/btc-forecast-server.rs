use std::sync::Arc;

use anyhow::{Context, Result};

use btc_forecast::backend::{router, ServerState};
use btc_forecast::coingecko::CoinGeckoClient;
use btc_forecast::config::Config;
use btc_forecast::forecast::ForecastSettings;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = Config::load().context("failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .json()
        .init();

    let state = Arc::new(ServerState {
        client: CoinGeckoClient::from_config(&config.coingecko)?,
        history_days: config.coingecko.history_days,
        settings: ForecastSettings::from(&config.forecast),
        seed: config.backend.seed,
    });

    let listener = tokio::net::TcpListener::bind(config.backend.bind_addr.as_str())
        .await
        .with_context(|| format!("failed to bind {}", config.backend.bind_addr))?;
    tracing::info!(addr = %config.backend.bind_addr, "Forecast backend listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received");
        })
        .await
        .context("server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
