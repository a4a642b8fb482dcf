//! "Recent Great Buys": the first few rows of the sorted results.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Block, Row, Table, Widget},
};
use watchboard_core::normalizer::top_n;
use watchboard_core::NormalizedTransaction;

pub struct RecentTable<'a> {
    results: &'a [NormalizedTransaction],
    rows: usize,
    theme: &'a Theme,
}

impl<'a> RecentTable<'a> {
    pub fn new(results: &'a [NormalizedTransaction], rows: usize, theme: &'a Theme) -> Self {
        Self { results, rows, theme }
    }
}

impl Widget for RecentTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Stock", "Amount", "Date"]).style(self.theme.table_header);
        let rows = top_n(self.results, self.rows).iter().map(|t| {
            Row::new([
                t.ticker.clone(),
                t.amount_text.clone(),
                t.transaction_date.clone(),
            ])
            .style(self.theme.table_row)
        });

        Table::new(
            rows,
            [Constraint::Length(8), Constraint::Fill(1), Constraint::Length(12)],
        )
        .header(header)
        .block(
            Block::bordered()
                .title(Line::styled(" Recent Great Buys ", self.theme.heading))
                .border_style(self.theme.border_unfocused),
        )
        .render(area, buf);
    }
}
