//! Line chart of the hourly temperature forecast.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget},
};
use watchboard_core::state::WeatherState;
use watchboard_core::Forecast;

pub struct ForecastChart<'a> {
    state: &'a WeatherState,
    theme: &'a Theme,
}

impl<'a> ForecastChart<'a> {
    pub fn new(state: &'a WeatherState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

/// `(x, °C)` pairs, x being the sample index.
pub fn chart_points(forecast: &Forecast) -> Vec<(f64, f64)> {
    forecast
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.celsius))
        .collect()
}

/// Y bounds padded by one degree on each side.
pub fn temperature_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (lo, hi) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, c)| {
        (lo.min(*c), hi.max(*c))
    });
    if lo.is_finite() && hi.is_finite() {
        [lo.floor() - 1.0, hi.ceil() + 1.0]
    } else {
        [0.0, 1.0]
    }
}

impl Widget for ForecastChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.state.forecast {
            Some(f) => format!(" Temperature for {} (°C) ", f.city.name),
            None => " Temperature (°C) ".to_string(),
        };
        let block = Block::bordered()
            .title(Line::styled(title, self.theme.heading))
            .border_style(self.theme.border_unfocused);

        let Some(forecast) = self.state.forecast.as_ref().filter(|f| !f.points.is_empty()) else {
            let inner = block.inner(area);
            block.render(area, buf);
            if self.state.loading {
                Paragraph::new(Line::styled("Loading…", self.theme.loading)).render(inner, buf);
            }
            return;
        };

        let points = chart_points(forecast);
        let [y_lo, y_hi] = temperature_bounds(&points);
        let x_hi = points.len().saturating_sub(1).max(1) as f64;

        let first = forecast.points.first().map(|p| p.hour_label()).unwrap_or_default();
        let middle = forecast.points[forecast.points.len() / 2].hour_label();
        let last = forecast.points.last().map(|p| p.hour_label()).unwrap_or_default();

        let dataset = Dataset::default()
            .name(forecast.city.name.clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(self.theme.line)
            .data(&points);

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(self.theme.axis)
                    .bounds([0.0, x_hi])
                    .labels(vec![first, middle, last]),
            )
            .y_axis(
                Axis::default()
                    .style(self.theme.axis)
                    .bounds([y_lo, y_hi])
                    .labels(vec![format!("{y_lo:.0}"), format!("{y_hi:.0}")]),
            )
            .render(area, buf);
    }
}
