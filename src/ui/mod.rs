pub mod chart;
pub mod dashboard;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::backend::BackendForecast;
use crate::event::AppEvent;
use crate::forecast::ForecastReport;
use crate::ticker::TickerState;

use chart::PriceChart;
use dashboard::{
    HorizonPanel, KeybindBar, LogPanel, ModelPanel, ProjectionPanel, RiskPanel, SignalPanel,
    StatusBar, TickerPanel,
};

const MAX_LOG_MESSAGES: usize = 200;

/// Shown wherever a computed number is NaN or infinite.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn fmt_price(v: f64) -> String {
    if v.is_finite() {
        format!("{:.2}", v)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

pub fn fmt_pct(v: f64) -> String {
    if v.is_finite() {
        format!("{:.1}%", v * 100.0)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

pub fn fmt_ratio(v: f64, decimals: usize) -> String {
    if v.is_finite() {
        format!("{:.*}", decimals, v)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

pub struct AppState {
    pub symbol: String,
    pub target_price: f64,
    pub ticker: TickerState,
    pub report: Option<ForecastReport>,
    pub closes: Vec<f64>,
    pub forecast_in_flight: bool,
    pub forecast_error: Option<String>,
    pub backend_enabled: bool,
    pub backend: Option<BackendForecast>,
    pub backend_in_flight: bool,
    pub backend_error: Option<String>,
    pub projection_scroll: usize,
    pub log_messages: Vec<String>,
}

impl AppState {
    pub fn new(symbol: &str, target_price: f64, backend_enabled: bool) -> Self {
        Self {
            symbol: symbol.to_string(),
            target_price,
            ticker: TickerState::default(),
            report: None,
            closes: Vec::new(),
            forecast_in_flight: false,
            forecast_error: None,
            backend_enabled,
            backend: None,
            backend_in_flight: false,
            backend_error: None,
            projection_scroll: 0,
            log_messages: Vec::new(),
        }
    }

    pub fn push_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            self.log_messages.remove(0);
        }
    }

    /// Mark a forecast as started. Refused while another one is running.
    pub fn begin_forecast(&mut self) -> bool {
        if self.forecast_in_flight {
            self.push_log("[WARN] Forecast already running".to_string());
            return false;
        }
        self.forecast_in_flight = true;
        self.forecast_error = None;
        self.push_log("Forecast started".to_string());
        true
    }

    pub fn begin_backend_fetch(&mut self) -> bool {
        if !self.backend_enabled {
            self.push_log("[WARN] No backend configured (set FORECAST_API_BASE)".to_string());
            return false;
        }
        if self.backend_in_flight {
            self.push_log("[WARN] Backend fetch already running".to_string());
            return false;
        }
        self.backend_in_flight = true;
        self.backend_error = None;
        true
    }

    pub fn scroll_projection(&mut self, delta: isize) {
        let len = self
            .report
            .as_ref()
            .map(|r| r.daily_projection.len())
            .unwrap_or(0);
        let max_scroll = len.saturating_sub(1);
        self.projection_scroll = self
            .projection_scroll
            .saturating_add_signed(delta)
            .min(max_scroll);
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::TickerPrice { price, at } => {
                self.ticker.on_price(price, at);
            }
            AppEvent::TickerError(msg) => {
                self.push_log(format!("[WARN] Ticker: {}", msg));
                self.ticker.on_error(msg);
            }
            AppEvent::ForecastReady { report, closes } => {
                self.forecast_in_flight = false;
                self.forecast_error = None;
                self.push_log(format!(
                    "Forecast ready: last {} | regime {} | 1d blend {}",
                    fmt_price(report.last_price),
                    report.regime,
                    fmt_price(report.blended.one_day)
                ));
                self.report = Some(*report);
                self.closes = closes;
                self.projection_scroll = 0;
            }
            AppEvent::ForecastFailed(msg) => {
                // previous result stays on screen
                self.forecast_in_flight = false;
                self.push_log(format!("[ERR] Forecast failed: {}", msg));
                self.forecast_error = Some(msg);
            }
            AppEvent::BackendReady(forecast) => {
                self.backend_in_flight = false;
                self.backend_error = None;
                self.push_log("Backend forecast received".to_string());
                self.backend = Some(*forecast);
            }
            AppEvent::BackendFailed(msg) => {
                self.backend_in_flight = false;
                self.push_log(format!("[ERR] Backend: {}", msg));
                self.backend_error = Some(msg);
            }
            AppEvent::LogMessage(msg) => {
                self.push_log(msg);
            }
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // status bar
            Constraint::Min(10),    // chart + ticker
            Constraint::Length(8),  // horizons / models / risk
            Constraint::Length(10), // projection + signals
            Constraint::Length(5),  // system log
            Constraint::Length(1),  // keybinds
        ])
        .split(frame.area());

    frame.render_widget(
        StatusBar {
            symbol: &state.symbol,
            forecast_in_flight: state.forecast_in_flight,
            backend_in_flight: state.backend_in_flight,
            ticker_polls: state.ticker.polls,
        },
        outer[0],
    );

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(outer[1]);

    let report = state.report.as_ref();
    let projection = report.map(|r| r.daily_projection.as_slice()).unwrap_or(&[]);
    frame.render_widget(
        PriceChart::new(&state.closes, "Daily close + projection")
            .projection(projection)
            .target(Some(state.target_price)),
        top[0],
    );
    frame.render_widget(
        TickerPanel {
            ticker: &state.ticker,
            target_price: state.target_price,
        },
        top[1],
    );

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(40),
            Constraint::Percentage(22),
        ])
        .split(outer[2]);
    frame.render_widget(HorizonPanel { report }, middle[0]);
    frame.render_widget(ModelPanel { report }, middle[1]);
    frame.render_widget(RiskPanel { report }, middle[2]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[3]);
    frame.render_widget(
        ProjectionPanel {
            report,
            scroll: state.projection_scroll,
        },
        lower[0],
    );
    frame.render_widget(
        SignalPanel {
            report,
            backend: state.backend.as_ref(),
            backend_error: state.backend_error.as_deref(),
        },
        lower[1],
    );

    frame.render_widget(LogPanel::new(&state.log_messages), outer[4]);
    frame.render_widget(KeybindBar, outer[5]);
}
