//! Horizontal bar chart of a representative's normalized transactions.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Widget},
};
use watchboard_core::normalizer::format_usd;
use watchboard_core::state::StocksState;

pub struct AmountChart<'a> {
    state: &'a StocksState,
    theme: &'a Theme,
}

impl<'a> AmountChart<'a> {
    pub fn new(state: &'a StocksState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

/// Heading shown above the chart.
pub fn chart_title(representative: Option<&str>) -> String {
    match representative {
        Some(name) => format!("Stock Transactions for {name}"),
        None => "Stock Transactions".to_string(),
    }
}

impl Widget for AmountChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = chart_title(self.state.selected.as_deref());
        let block = Block::bordered()
            .title(Line::styled(format!(" {title} "), self.theme.heading))
            .border_style(self.theme.border_unfocused);

        if self.state.results.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            let message = if self.state.loading {
                Line::styled("Loading…", self.theme.loading)
            } else if self.state.error.is_some() {
                // The error line above the body already says what went wrong.
                Line::default()
            } else {
                let name = self.state.selected.as_deref().unwrap_or("this representative");
                Line::from(format!("No transactions found for {name}."))
            };
            Paragraph::new(message).render(inner, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .state
            .results
            .iter()
            .map(|t| {
                Bar::default()
                    .value(t.amount.max(0.0).round() as u64)
                    .label(Line::from(t.ticker.clone()))
                    .text_value(format_usd(t.amount))
                    .style(self.theme.bar)
                    .value_style(self.theme.bar_value)
            })
            .collect();

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .label_style(self.theme.bar_label)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
