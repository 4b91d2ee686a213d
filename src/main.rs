use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use tokio::sync::{mpsc, watch};

use btc_forecast::backend::BackendClient;
use btc_forecast::coingecko::CoinGeckoClient;
use btc_forecast::config::Config;
use btc_forecast::event::AppEvent;
use btc_forecast::forecast::{run_forecast, BoxMuller, ForecastSettings};
use btc_forecast::input::{parse_main_command, UiCommand};
use btc_forecast::model::price::closes;
use btc_forecast::ticker::spawn_ticker;
use btc_forecast::ui::{self, AppState};

/// Fetch history, then run the pipeline on a blocking worker so the UI keeps drawing.
async fn run_forecast_task(
    client: Arc<CoinGeckoClient>,
    history_days: u32,
    settings: ForecastSettings,
    seed: Option<u64>,
) -> AppEvent {
    let history = match client.daily_history(history_days).await {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "History fetch failed");
            return AppEvent::ForecastFailed(format!("{:#}", e));
        }
    };

    let joined = tokio::task::spawn_blocking(move || {
        let mut sampler = BoxMuller::from_optional_seed(seed);
        run_forecast(&history, &settings, &mut sampler).map(|report| (report, closes(&history)))
    })
    .await;

    match joined {
        Ok(Ok((report, closes))) => AppEvent::ForecastReady {
            report: Box::new(report),
            closes,
        },
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Forecast computation failed");
            AppEvent::ForecastFailed(e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Forecast worker panicked");
            AppEvent::ForecastFailed(format!("forecast worker failed: {}", e))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // reqwest's rustls backend needs a process-wide crypto provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Make sure config/default.toml exists in the working directory");
            std::process::exit(1);
        }
    };

    // Log to file so it doesn't interfere with the TUI
    let log_file = std::fs::File::create("btc-forecast.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        coin = %config.coingecko.coin_id,
        rest_url = %config.coingecko.rest_base_url,
        target = config.forecast.target_price,
        backend = ?config.backend.api_base(),
        "Starting btc-forecast"
    );

    let client = Arc::new(CoinGeckoClient::from_config(&config.coingecko)?);
    let backend = match config.backend.api_base() {
        Some(base) => Some(Arc::new(BackendClient::new(
            base,
            config.coingecko.request_timeout(),
        )?)),
        None => None,
    };
    let settings = ForecastSettings::from(&config.forecast);

    let (app_tx, mut app_rx) = mpsc::channel::<AppEvent>(64);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let ticker_handle = spawn_ticker(
        client.clone(),
        config.coingecko.ticker_interval(),
        app_tx.clone(),
        shutdown_rx,
    );

    let ctrl_c_shutdown = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received");
        let _ = ctrl_c_shutdown.send(true);
    });

    let mut terminal = ratatui::init();
    let mut app_state = AppState::new(
        &format!(
            "{}/{}",
            config.coingecko.coin_id,
            config.coingecko.vs_currency.to_ascii_uppercase()
        ),
        settings.target_price,
        backend.is_some(),
    );
    app_state.push_log("btc-forecast started | press F to forecast".to_string());

    let result: Result<()> = loop {
        if *shutdown_tx.borrow() {
            break Ok(());
        }

        while let Ok(event) = app_rx.try_recv() {
            app_state.apply(event);
        }

        if let Err(e) = terminal.draw(|frame| ui::render(frame, &app_state)) {
            break Err(e.into());
        }

        let polled = match crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))
        {
            Ok(p) => p,
            Err(e) => break Err(e.into()),
        };
        if !polled {
            continue;
        }
        let key = match crossterm::event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e.into()),
        };

        match parse_main_command(&key.code) {
            Some(UiCommand::Quit) => {
                tracing::info!("User quit");
                break Ok(());
            }
            Some(UiCommand::RunForecast) => {
                if app_state.begin_forecast() {
                    let tx = app_tx.clone();
                    let client = client.clone();
                    let history_days = config.coingecko.history_days;
                    let seed = config.forecast.seed;
                    tokio::spawn(async move {
                        let event = run_forecast_task(client, history_days, settings, seed).await;
                        let _ = tx.send(event).await;
                    });
                }
            }
            Some(UiCommand::FetchBackend) => {
                if app_state.begin_backend_fetch() {
                    if let Some(backend) = backend.clone() {
                        let tx = app_tx.clone();
                        tokio::spawn(async move {
                            let event = match backend.fetch_forecast().await {
                                Ok(forecast) => AppEvent::BackendReady(Box::new(forecast)),
                                Err(e) => AppEvent::BackendFailed(format!("{:#}", e)),
                            };
                            let _ = tx.send(event).await;
                        });
                    }
                }
            }
            Some(UiCommand::ScrollProjectionUp) => app_state.scroll_projection(-1),
            Some(UiCommand::ScrollProjectionDown) => app_state.scroll_projection(1),
            None => {}
        }
    };

    let _ = shutdown_tx.send(true);
    ratatui::restore();
    if tokio::time::timeout(Duration::from_secs(2), ticker_handle)
        .await
        .is_err()
    {
        tracing::warn!("Ticker did not stop in time");
    }
    tracing::info!("Shutdown complete");
    result
}
