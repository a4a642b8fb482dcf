//! Selection bar — one row of buttons, built-in entries first, then the
//! ones the user added.
//!
//! # Navigation
//! - `←`/`h` and `→`/`l` move the cursor, clamped at both ends.
//! - `Enter` is handled by the app shell, which reads [`SelectionBarState::cursor`].

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionBarState {
    pub cursor: usize,
}

impl SelectionBarState {
    /// Move the cursor among `len` buttons.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        match event {
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
        self.clamp(len);
    }

    /// Keep the cursor in range after the button list changed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Put the cursor on the button named `name` (case-insensitive).
    pub fn focus_on<'a>(&mut self, mut buttons: impl Iterator<Item = &'a String>, name: &str) {
        let wanted = name.to_lowercase();
        if let Some(i) = buttons.position(|b| b.to_lowercase() == wanted) {
            self.cursor = i;
        }
    }
}

pub struct SelectionBar<'a> {
    buttons: Vec<&'a str>,
    selected: Option<&'a str>,
    state: SelectionBarState,
    focused: bool,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> SelectionBar<'a> {
    pub fn new(
        buttons: impl Iterator<Item = &'a String>,
        selected: Option<&'a str>,
        state: SelectionBarState,
        focused: bool,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            buttons: buttons.map(String::as_str).collect(),
            selected,
            state,
            focused,
            title,
            theme,
        }
    }
}

impl Widget for SelectionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let selected = self.selected.map(str::to_lowercase);
        let mut spans = Vec::with_capacity(self.buttons.len() * 2);
        for (i, label) in self.buttons.iter().enumerate() {
            let mut style = if selected.as_deref() == Some(label.to_lowercase().as_str()) {
                self.theme.button_selected
            } else {
                self.theme.button_idle
            };
            if self.focused && i == self.state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
