use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::coingecko::CoinGeckoClient;
use crate::event::AppEvent;

/// Display state of the live ticker. A failed poll keeps the last known price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerState {
    pub last_price: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub polls: u64,
}

impl TickerState {
    pub fn on_price(&mut self, price: f64, at: DateTime<Utc>) {
        self.polls += 1;
        self.last_price = Some(price);
        self.updated_at = Some(at);
        self.last_error = None;
    }

    pub fn on_error(&mut self, message: String) {
        self.polls += 1;
        self.last_error = Some(message);
    }
}

/// Poll the spot price every `interval` until `shutdown` flips to true.
pub fn spawn_ticker(
    client: Arc<CoinGeckoClient>,
    interval: Duration,
    app_tx: mpsc::Sender<AppEvent>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = tokio::time::interval(interval);
        ticks.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    let event = match client.spot_price().await {
                        Ok(price) => {
                            tracing::debug!(price, "Ticker price");
                            AppEvent::TickerPrice { price, at: Utc::now() }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Ticker poll failed");
                            AppEvent::TickerError(format!("{:#}", e))
                        }
                    };
                    if app_tx.send(event).await.is_err() {
                        tracing::info!("App channel closed, ticker exiting");
                        break;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Ticker shutting down");
                        break;
                    }
                }
            }
        }
    })
}
