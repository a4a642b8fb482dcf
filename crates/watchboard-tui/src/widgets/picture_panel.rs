//! Astronomy picture of the day: title, link and explanation.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};
use watchboard_core::state::WeatherState;

pub struct PicturePanel<'a> {
    state: &'a WeatherState,
    theme: &'a Theme,
}

impl<'a> PicturePanel<'a> {
    pub fn new(state: &'a WeatherState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for PicturePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Line::styled(" Picture of the Day ", self.theme.heading))
            .border_style(self.theme.border_unfocused);

        let lines: Vec<Line> = match (&self.state.picture, &self.state.picture_error) {
            (Some(picture), _) => {
                let mut lines = vec![Line::styled(picture.title.clone(), self.theme.picture_title)];
                if let Some(date) = &picture.date {
                    lines.push(Line::from(date.clone()));
                }
                lines.push(Line::styled(picture.url.clone(), self.theme.link));
                lines.push(Line::default());
                lines.push(Line::from(picture.explanation.clone()));
                lines
            }
            (None, Some(err)) => vec![Line::styled(err.clone(), self.theme.error)],
            (None, None) => vec![Line::styled("Loading…", self.theme.loading)],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchboard_core::PictureOfDay;

    fn rendered(state: &WeatherState) -> String {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        PicturePanel::new(state, &theme).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_title_and_link() {
        let mut state = WeatherState::default();
        state.picture = Some(PictureOfDay {
            title: "Pillars of Creation".into(),
            url: "https://apod.nasa.gov/x.jpg".into(),
            explanation: "Gas and dust.".into(),
            date: None,
        });
        let text = rendered(&state);
        assert!(text.contains("Pillars of Creation"));
        assert!(text.contains("https://apod.nasa.gov/x.jpg"));
    }

    #[test]
    fn shows_error_when_fetch_failed() {
        let mut state = WeatherState::default();
        state.picture_error = Some("Failed to fetch picture of the day.".into());
        assert!(rendered(&state).contains("Failed to fetch picture"));
    }
}
