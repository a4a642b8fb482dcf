//! watchboard TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use watchboard_core::config::Config;

/// Start the TUI with `config`, resolving the theme it names.
pub fn run(config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(theme = %config.ui.theme, tab = %config.ui.start_tab, "starting tui");
    App::new(config, theme)?.run()
}
