//! Tab bar widget — the strip of tabs at the top of the screen.

use crate::app::Tab;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line tab strip. A `●` suffix marks a tab with a fetch in
/// flight. Keybinding hints are right-aligned in the same row.
pub struct TabBar<'a> {
    active: Tab,
    /// `(tab, loading)` in display order.
    tabs: [(Tab, bool); 2],
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Tab, stocks_loading: bool, weather_loading: bool, theme: &'a Theme) -> Self {
        Self {
            active,
            tabs: [(Tab::Stocks, stocks_loading), (Tab::Weather, weather_loading)],
            theme,
        }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .tabs
            .iter()
            .map(|(tab, loading)| {
                let busy = if *loading { " ●" } else { "" };
                Line::from(format!(" {}{} ", tab.label(), busy))
            })
            .collect();

        let selected = self.tabs.iter().position(|(t, _)| *t == self.active).unwrap_or(0);

        Tabs::new(labels)
            .select(selected)
            .highlight_style(self.theme.button_selected)
            .divider("")
            .render(area, buf);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}
