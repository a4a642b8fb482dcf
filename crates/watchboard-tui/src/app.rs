//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Fetches run on a tokio
//! runtime owned by [`App`]; their outcomes come back over an mpsc channel
//! that the loop drains between frames, so all state lives on this thread.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        amount_chart::AmountChart,
        command_bar::{CommandBar, CommandBarState},
        forecast_chart::ForecastChart,
        help::HelpPopup,
        input_bar::{InputBar, InputBarState},
        picture_panel::PicturePanel,
        recent_table::RecentTable,
        selection_bar::{SelectionBar, SelectionBarState},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use watchboard_core::config::Config;
use watchboard_core::state::{
    stocks, weather, StocksEffect, StocksEvent, StocksState, WeatherEffect, WeatherEvent,
    WeatherState,
};
use watchboard_feeds::pipeline::{run_stocks_effect, run_weather_effect};
use watchboard_feeds::Feeds;

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stocks,
    Weather,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Stocks => "1:stocks",
            Tab::Weather => "2:weather",
        }
    }

    fn other(self) -> Tab {
        match self {
            Tab::Stocks => Tab::Weather,
            Tab::Weather => Tab::Stocks,
        }
    }

    /// Tab named in `[ui] start_tab`; anything unrecognised means stocks.
    pub fn from_config(name: &str) -> Tab {
        if name.eq_ignore_ascii_case("weather") {
            Tab::Weather
        } else {
            Tab::Stocks
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The selection bar of the active tab.
    Buttons,
    /// The add-entry input bar.
    Input,
    /// Vim-style `:` command line is active.
    Command,
}

/// I/O requested by a state update, to be run off the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    Stocks(StocksEffect),
    Weather(WeatherEffect),
}

/// A finished [`Job`], fed back into the matching tab's state.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Stocks(StocksEvent),
    Weather(WeatherEvent),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub tab: Tab,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub stocks: StocksState,
    pub weather: WeatherState,
    pub stock_buttons: SelectionBarState,
    pub city_buttons: SelectionBarState,
    pub input: InputBarState,
    pub command_bar: CommandBarState,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            tab: Tab::from_config(&config.ui.start_tab),
            focus: Focus::Buttons,
            prev_focus: Focus::Buttons,
            stocks: StocksState::new(&config.stocks),
            weather: WeatherState::new(&config.weather),
            stock_buttons: SelectionBarState::default(),
            city_buttons: SelectionBarState::default(),
            input: InputBarState::default(),
            command_bar: CommandBarState::default(),
            theme,
            config,
            show_help: false,
            quit: false,
        }
    }

    /// Kick off both tabs' startup fetches.
    pub fn startup(&mut self) -> Vec<Job> {
        let mut jobs = self.dispatch_stocks(StocksEvent::Startup);
        jobs.extend(self.dispatch_weather(WeatherEvent::Startup));
        jobs
    }

    pub fn dispatch_stocks(&mut self, event: StocksEvent) -> Vec<Job> {
        let (next, effects) = stocks::update(std::mem::take(&mut self.stocks), event);
        self.stocks = next;
        if let Some(name) = &self.stocks.selected {
            self.stock_buttons.focus_on(self.stocks.buttons(), name);
        }
        effects.into_iter().map(Job::Stocks).collect()
    }

    pub fn dispatch_weather(&mut self, event: WeatherEvent) -> Vec<Job> {
        let (next, effects) = weather::update(std::mem::take(&mut self.weather), event);
        self.weather = next;
        if let Some(name) = &self.weather.selected {
            self.city_buttons.focus_on(self.weather.buttons(), name);
        }
        effects.into_iter().map(Job::Weather).collect()
    }

    /// Feed a finished fetch back into state.
    pub fn complete(&mut self, done: Completion) -> Vec<Job> {
        match done {
            Completion::Stocks(event) => self.dispatch_stocks(event),
            Completion::Weather(event) => self.dispatch_weather(event),
        }
    }

    /// Re-fetch the active tab's selection.
    pub fn reload(&mut self) -> Vec<Job> {
        match self.tab {
            Tab::Stocks => self.dispatch_stocks(StocksEvent::Reload),
            Tab::Weather => self.dispatch_weather(WeatherEvent::Reload),
        }
    }

    fn button_count(&self) -> usize {
        match self.tab {
            Tab::Stocks => self.stocks.buttons().count(),
            Tab::Weather => self.weather.buttons().count(),
        }
    }

    fn activate_button(&mut self) -> Vec<Job> {
        match self.tab {
            Tab::Stocks => {
                let name = self.stocks.buttons().nth(self.stock_buttons.cursor).cloned();
                match name {
                    Some(name) => self.dispatch_stocks(StocksEvent::Select(name)),
                    None => Vec::new(),
                }
            }
            Tab::Weather => {
                let name = self.weather.buttons().nth(self.city_buttons.cursor).cloned();
                match name {
                    Some(name) => self.dispatch_weather(WeatherEvent::Select(name)),
                    None => Vec::new(),
                }
            }
        }
    }

    fn submit_input(&mut self) -> Vec<Job> {
        let text = self.input.take();
        self.focus = Focus::Buttons;
        match self.tab {
            Tab::Stocks => self.dispatch_stocks(StocksEvent::AddCustom(text)),
            Tab::Weather => self.dispatch_weather(WeatherEvent::AddCustom(text)),
        }
    }

    /// Apply one key event and return the fetches it started.
    pub fn handle(&mut self, event: AppEvent) -> Vec<Job> {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                _ => {}
            }
            return Vec::new();
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                }
                AppEvent::Enter => {
                    let input = self.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                            return execute_command(self, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                        }
                        Err(msg) => {
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => self.quit = true,
                other => self.command_bar.handle(&other),
            }
            return Vec::new();
        }

        if self.focus == Focus::Input {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("focus: Input -> Buttons");
                    self.focus = Focus::Buttons;
                }
                AppEvent::Enter => return self.submit_input(),
                AppEvent::Quit => self.quit = true,
                AppEvent::NextTab => {
                    self.tab = self.tab.other();
                    self.focus = Focus::Buttons;
                }
                other => self.input.handle(&other),
            }
            return Vec::new();
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::NextTab => self.tab = self.tab.other(),
            AppEvent::Char('1') => self.tab = Tab::Stocks,
            AppEvent::Char('2') => self.tab = Tab::Weather,
            AppEvent::Char('r') => return self.reload(),
            AppEvent::InputFocus => {
                tracing::debug!("focus -> Input");
                self.focus = Focus::Input;
            }
            AppEvent::Enter => return self.activate_button(),
            AppEvent::Nav(_) => {
                let len = self.button_count();
                match self.tab {
                    Tab::Stocks => self.stock_buttons.handle(&event, len),
                    Tab::Weather => self.city_buttons.handle(&event, len),
                }
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            _ => {}
        }
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    feeds: Arc<Feeds>,
    runtime: tokio::runtime::Runtime,
    done_tx: UnboundedSender<Completion>,
    done_rx: UnboundedReceiver<Completion>,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> anyhow::Result<Self> {
        let feeds = Arc::new(Feeds::from_config(&config.endpoints)?);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Ok(App {
            state: AppState::new(config, theme),
            feeds,
            runtime,
            done_tx,
            done_rx,
        })
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let jobs = self.state.startup();
        self.spawn_all(jobs);

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            while let Ok(done) = self.done_rx.try_recv() {
                let jobs = self.state.complete(done);
                self.spawn_all(jobs);
            }

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let app_event = match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        }
                    }
                    Event::Key(_) => None,
                    other => event::to_app_event(other),
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    let jobs = self.state.handle(ev);
                    self.spawn_all(jobs);
                }
            }
        }
        Ok(())
    }

    fn spawn_all(&self, jobs: Vec<Job>) {
        for job in jobs {
            self.spawn(job);
        }
    }

    fn spawn(&self, job: Job) {
        tracing::debug!(?job, "spawning fetch");
        let feeds = Arc::clone(&self.feeds);
        let tx = self.done_tx.clone();
        self.runtime.spawn(async move {
            let done = match job {
                Job::Stocks(effect) => {
                    Completion::Stocks(run_stocks_effect(&feeds.stocks, effect).await)
                }
                Job::Weather(effect) => Completion::Weather(
                    run_weather_effect(&feeds.weather, &feeds.weather, &feeds.apod, effect).await,
                ),
            };
            // The receiver is gone only while the app is shutting down.
            let _ = tx.send(done);
        });
    }
}

/// Header row plus the two border rows on top of `rows` table rows.
fn table_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(3)
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Input | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: tab bar | buttons | input | error line | body
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let theme = &state.theme;
    frame.render_widget(
        TabBar::new(state.tab, state.stocks.loading, state.weather.loading, theme),
        vert[0],
    );

    let buttons_focused = state.focus == Focus::Buttons;
    let input_focused = state.focus == Focus::Input;
    let (noun, error) = match state.tab {
        Tab::Stocks => ("representative", state.stocks.error.as_deref()),
        Tab::Weather => ("city", state.weather.error.as_deref()),
    };

    match state.tab {
        Tab::Stocks => {
            frame.render_widget(
                SelectionBar::new(
                    state.stocks.buttons(),
                    state.stocks.selected.as_deref(),
                    state.stock_buttons,
                    buttons_focused,
                    "Representatives",
                    theme,
                ),
                vert[1],
            );
            let body = Layout::default()
                .direction(LayoutDir::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(table_height(state.config.ui.recent_rows)),
                ])
                .split(vert[4]);
            frame.render_widget(AmountChart::new(&state.stocks, theme), body[0]);
            frame.render_widget(
                RecentTable::new(&state.stocks.results, state.config.ui.recent_rows, theme),
                body[1],
            );
        }
        Tab::Weather => {
            frame.render_widget(
                SelectionBar::new(
                    state.weather.buttons(),
                    state.weather.selected.as_deref(),
                    state.city_buttons,
                    buttons_focused,
                    "Cities",
                    theme,
                ),
                vert[1],
            );
            let body = Layout::default()
                .direction(LayoutDir::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Fill(1)])
                .split(vert[4]);
            frame.render_widget(ForecastChart::new(&state.weather, theme), body[0]);
            frame.render_widget(PicturePanel::new(&state.weather, theme), body[1]);
        }
    }

    frame.render_widget(InputBar::new(&state.input, input_focused, noun, theme), vert[2]);

    if let Some(err) = error {
        frame.render_widget(Paragraph::new(Line::styled(err, theme.error)), vert[3]);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if input_focused {
        let bar = InputBar::new(&state.input, true, noun, theme);
        frame.set_cursor_position(bar.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
