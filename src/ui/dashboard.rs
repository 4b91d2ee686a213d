use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::backend::BackendForecast;
use crate::forecast::{ForecastReport, Horizon, Regime};
use crate::ticker::TickerState;

use super::{fmt_pct, fmt_price, fmt_ratio, NOT_AVAILABLE};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

fn signed_color(val: f64) -> Color {
    if val > 0.0 {
        Color::Green
    } else if val < 0.0 {
        Color::Red
    } else {
        Color::White
    }
}

fn regime_color(regime: Regime) -> Color {
    match regime {
        Regime::Bull => Color::Green,
        Regime::Bear => Color::Red,
        Regime::Sideways => Color::Yellow,
    }
}

fn waiting(title: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(label("Press [F] to run a forecast")))
        .block(panel(title))
        .render(area, buf);
}

pub struct TickerPanel<'a> {
    pub ticker: &'a TickerState,
    pub target_price: f64,
}

impl Widget for TickerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let price = self
            .ticker
            .last_price
            .map(fmt_price)
            .unwrap_or_else(|| "---".to_string());
        let updated = self
            .ticker
            .updated_at
            .map(|t| t.format("%H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "---".to_string());

        let mut lines = vec![
            Line::from(Span::styled(
                format!("${}", price),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![label("Updated: "), value(updated)]),
            Line::from(vec![
                label("Target:  "),
                value(format!("${}", fmt_price(self.target_price))),
            ]),
        ];
        if let Some(err) = &self.ticker.last_error {
            lines.push(Line::from(Span::styled(
                format!("[ERR] {}", err),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines)
            .block(panel(" Live BTC/USD "))
            .render(area, buf);
    }
}

pub struct HorizonPanel<'a> {
    pub report: Option<&'a ForecastReport>,
}

impl Widget for HorizonPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = " Monte Carlo & Blend ";
        let Some(report) = self.report else {
            return waiting(title, area, buf);
        };

        let mut lines = vec![Line::from(vec![label(
            "     MC price      hit%    blended",
        )])];
        for horizon in Horizon::ALL {
            let (mc, hit) = report
                .horizon(horizon)
                .map(|h| (h.price, h.hit_probability))
                .unwrap_or((f64::NAN, f64::NAN));
            let blended = report.blended.get(horizon);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<4} ", horizon.label()),
                    Style::default().fg(Color::Yellow),
                ),
                value(format!("{:>12}", fmt_price(mc))),
                value(format!("{:>8}", fmt_pct(hit))),
                Span::styled(
                    format!("{:>12}", fmt_price(blended)),
                    Style::default().fg(signed_color(blended - report.last_price)),
                ),
            ]));
        }
        lines.push(Line::from(vec![
            label("mu "),
            value(fmt_ratio(report.mu, 5)),
            label("  sigma "),
            value(fmt_ratio(report.sigma, 5)),
        ]));

        Paragraph::new(lines).block(panel(title)).render(area, buf);
    }
}

pub struct ModelPanel<'a> {
    pub report: Option<&'a ForecastReport>,
}

impl Widget for ModelPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = " Toy Models ";
        let Some(report) = self.report else {
            return waiting(title, area, buf);
        };
        let m = &report.models;
        let garch = m
            .garch_volatility
            .iter()
            .map(|v| fmt_ratio(*v, 4))
            .collect::<Vec<_>>()
            .join(" ");

        let lines = vec![
            Line::from(label("         1d          1w          1m")),
            Line::from(vec![
                label("ARIMA  "),
                value(format!(
                    "{:>11} {:>11} {:>11}",
                    fmt_price(m.arima.one_day),
                    fmt_price(m.arima.one_week),
                    fmt_price(m.arima.one_month)
                )),
            ]),
            Line::from(vec![
                label("Prophet"),
                value(format!(
                    "{:>11} {:>11} {:>11}",
                    fmt_price(m.prophet.prices.one_day),
                    fmt_price(m.prophet.prices.one_week),
                    fmt_price(m.prophet.prices.one_month)
                )),
            ]),
            Line::from(vec![label("LSTM   "), value(format!("{:>11}", fmt_price(m.lstm)))]),
            Line::from(vec![label("GARCH vol "), value(garch)]),
        ];

        Paragraph::new(lines).block(panel(title)).render(area, buf);
    }
}

pub struct RiskPanel<'a> {
    pub report: Option<&'a ForecastReport>,
}

impl Widget for RiskPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = " Regime & Risk ";
        let Some(report) = self.report else {
            return waiting(title, area, buf);
        };
        let r = &report.risk;
        let lines = vec![
            Line::from(vec![
                label("Regime:  "),
                Span::styled(
                    report.regime.as_str().to_ascii_uppercase(),
                    Style::default()
                        .fg(regime_color(report.regime))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![label("Sharpe:  "), value(fmt_ratio(r.sharpe, 2))]),
            Line::from(vec![label("Sortino: "), value(fmt_ratio(r.sortino, 2))]),
            Line::from(vec![
                label("Max DD:  "),
                Span::styled(fmt_pct(r.max_drawdown), Style::default().fg(Color::Red)),
            ]),
            Line::from(vec![label("Calmar:  "), value(fmt_ratio(r.calmar, 2))]),
        ];

        Paragraph::new(lines).block(panel(title)).render(area, buf);
    }
}

pub struct ProjectionPanel<'a> {
    pub report: Option<&'a ForecastReport>,
    pub scroll: usize,
}

impl Widget for ProjectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = " Daily Projection (95% band) ";
        let Some(report) = self.report else {
            return waiting(title, area, buf);
        };

        let rows = area.height.saturating_sub(3) as usize;
        let mut lines = vec![Line::from(label(" day       price        lower        upper"))];
        lines.extend(
            report
                .daily_projection
                .iter()
                .skip(self.scroll)
                .take(rows)
                .map(|p| {
                    Line::from(vec![
                        Span::styled(format!("{:>4}", p.day), Style::default().fg(Color::Yellow)),
                        value(format!(
                            " {:>11}  {:>11}  {:>11}",
                            fmt_price(p.price),
                            fmt_price(p.lower),
                            fmt_price(p.upper)
                        )),
                    ])
                }),
        );

        Paragraph::new(lines).block(panel(title)).render(area, buf);
    }
}

pub struct SignalPanel<'a> {
    pub report: Option<&'a ForecastReport>,
    pub backend: Option<&'a BackendForecast>,
    pub backend_error: Option<&'a str>,
}

impl Widget for SignalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        if let Some(report) = self.report {
            let t = &report.target;
            let when = match (t.predicted_day, t.predicted_date) {
                (Some(day), Some(date)) => format!("day {} ({})", day, date),
                (Some(day), None) => format!("day {}", day),
                _ => "not within projection".to_string(),
            };
            lines.push(Line::from(vec![
                label("Target hit: "),
                value(when),
                label("  p="),
                value(fmt_pct(t.probability)),
            ]));
            let exit = &report.exit_signal;
            let (tag, color) = if exit.signal {
                ("EXIT", Color::Red)
            } else {
                ("HOLD", Color::Green)
            };
            lines.push(Line::from(vec![
                label("Exit signal: "),
                Span::styled(tag, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                label(" score "),
                value(fmt_ratio(exit.score, 1)),
            ]));
            lines.push(Line::from(Span::styled(
                exit.explanation.clone(),
                Style::default().fg(Color::White),
            )));
        } else {
            lines.push(Line::from(label("Press [F] to run a forecast")));
        }

        if let Some(backend) = self.backend {
            lines.push(Line::from(vec![
                label("Backend: "),
                value(format!(
                    "last {} | 1d {} | regime {}",
                    backend.last_price.map(fmt_price).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    backend
                        .blended_price("1d")
                        .map(fmt_price)
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    backend.regime.as_deref().unwrap_or("unknown"),
                )),
            ]));
        }
        if let Some(err) = self.backend_error {
            lines.push(Line::from(Span::styled(
                format!("[ERR] backend: {}", err),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines)
            .block(panel(" Target & Signals "))
            .render(area, buf);
    }
}

pub struct LogPanel<'a> {
    messages: &'a [String],
}

impl<'a> LogPanel<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.saturating_sub(2) as usize;
        let start = self.messages.len().saturating_sub(rows);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|msg| {
                let color = if msg.starts_with("[ERR]") {
                    Color::Red
                } else if msg.starts_with("[WARN]") {
                    Color::Yellow
                } else {
                    Color::DarkGray
                };
                Line::from(Span::styled(msg.as_str(), Style::default().fg(color)))
            })
            .collect();

        Paragraph::new(lines).block(panel(" System Log ")).render(area, buf);
    }
}

pub struct StatusBar<'a> {
    pub symbol: &'a str,
    pub forecast_in_flight: bool,
    pub backend_in_flight: bool,
    pub ticker_polls: u64,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let run_status = if self.forecast_in_flight {
            Span::styled(
                " FORECASTING ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" IDLE ", Style::default().fg(Color::Green))
        };

        let mut spans = vec![
            Span::styled(
                " btc-forecast ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.symbol, Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            run_status,
        ];
        if self.backend_in_flight {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled("BACKEND...", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("polls: {}", self.ticker_polls),
            Style::default().fg(Color::DarkGray),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" [F]", Style::default().fg(Color::Yellow)),
            Span::styled("orecast  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[B]", Style::default().fg(Color::Yellow)),
            Span::styled("ackend  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[J/K]", Style::default().fg(Color::Yellow)),
            Span::styled(" scroll  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::styled("uit", Style::default().fg(Color::DarkGray)),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
