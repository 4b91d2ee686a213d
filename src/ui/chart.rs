use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::forecast::ProjectionPoint;

/// Daily closes followed by the projected mean and its 95% band.
pub struct PriceChart<'a> {
    closes: &'a [f64],
    projection: &'a [ProjectionPoint],
    target: Option<f64>,
    title: &'a str,
}

impl<'a> PriceChart<'a> {
    pub fn new(closes: &'a [f64], title: &'a str) -> Self {
        Self {
            closes,
            projection: &[],
            target: None,
            title,
        }
    }

    pub fn projection(mut self, projection: &'a [ProjectionPoint]) -> Self {
        self.projection = projection;
        self
    }

    pub fn target(mut self, target: Option<f64>) -> Self {
        self.target = target;
        self
    }
}

struct Scale {
    min: f64,
    range: f64,
    height: usize,
}

impl Scale {
    fn row(&self, price: f64) -> Option<usize> {
        if !price.is_finite() {
            return None;
        }
        let normalized = ((price - self.min) / self.range).clamp(0.0, 1.0);
        let offset = ((normalized * (self.height - 1) as f64) as usize).min(self.height - 1);
        Some(self.height - 1 - offset)
    }
}

impl Widget for PriceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.closes.is_empty() || inner.height < 3 || inner.width < 8 {
            return;
        }

        let chart_height = inner.height.saturating_sub(1) as usize; // leave 1 row for the min label
        let chart_width = inner.width as usize;

        // Split columns between history and projection, favouring history.
        let proj_cols = if self.projection.is_empty() {
            0
        } else {
            (chart_width / 3).min(self.projection.len())
        };
        let hist_cols = chart_width - proj_cols;
        let visible = &self.closes[self.closes.len().saturating_sub(hist_cols)..];
        let projected: Vec<&ProjectionPoint> = if proj_cols == 0 {
            Vec::new()
        } else {
            // sample the projection evenly across the available columns
            (0..proj_cols)
                .map(|i| &self.projection[i * self.projection.len() / proj_cols])
                .collect()
        };

        let mut min_price = visible.iter().cloned().fold(f64::INFINITY, f64::min);
        let mut max_price = visible.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for p in &projected {
            for v in [p.lower, p.upper] {
                if v.is_finite() {
                    min_price = min_price.min(v);
                    max_price = max_price.max(v);
                }
            }
        }
        if let Some(t) = self.target.filter(|t| t.is_finite()) {
            min_price = min_price.min(t);
            max_price = max_price.max(t);
        }
        let range = max_price - min_price;
        let scale = Scale {
            min: min_price,
            range: if range < 0.01 { 1.0 } else { range },
            height: chart_height,
        };

        if let Some(row) = self.target.and_then(|t| scale.row(t)) {
            for col in 0..chart_width {
                buf.set_string(
                    inner.x + col as u16,
                    inner.y + row as u16,
                    "-",
                    Style::default().fg(Color::Magenta),
                );
            }
        }

        for (i, &price) in visible.iter().enumerate() {
            if let Some(row) = scale.row(price) {
                buf.set_string(
                    inner.x + i as u16,
                    inner.y + row as u16,
                    "●",
                    Style::default().fg(Color::Cyan),
                );
            }
        }

        for (i, p) in projected.iter().enumerate() {
            let x = inner.x + (visible.len() + i) as u16;
            if x >= inner.x + inner.width {
                break;
            }
            for bound in [p.lower, p.upper] {
                if let Some(row) = scale.row(bound) {
                    buf.set_string(x, inner.y + row as u16, "·", Style::default().fg(Color::DarkGray));
                }
            }
            if let Some(row) = scale.row(p.price) {
                buf.set_string(x, inner.y + row as u16, "●", Style::default().fg(Color::Yellow));
            }
        }

        let label_y = inner.y + inner.height - 1;
        buf.set_string(
            inner.x,
            inner.y,
            format!("{:.1}", max_price),
            Style::default().fg(Color::DarkGray),
        );
        buf.set_string(
            inner.x,
            label_y,
            format!("{:.1}", min_price),
            Style::default().fg(Color::DarkGray),
        );
    }
}
