//! Stocks tab state: selected representative, buttons, latest results.

use crate::config::StocksConfig;
use crate::error::WatchError;
use crate::types::NormalizedTransaction;

use super::{clean_name, contains_name, RequestToken, TokenIssuer};

#[derive(Debug, Clone)]
pub struct StocksState {
    /// Representative whose transactions are (being) shown.
    pub selected: Option<String>,
    /// Built-in buttons, in display order.
    pub defaults: Vec<String>,
    /// User-added buttons. Append-only for the lifetime of the session.
    pub custom: Vec<String>,
    /// User-visible error text; `None` when the last action succeeded.
    pub error: Option<String>,
    /// Normalized transactions for `selected`, largest first.
    pub results: Vec<NormalizedTransaction>,
    /// A fetch for the latest token is outstanding.
    pub loading: bool,
    startup_name: String,
    started: bool,
    tokens: TokenIssuer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StocksEvent {
    /// Application start. Selects the startup representative once.
    Startup,
    /// A button was activated.
    Select(String),
    /// The user submitted a name in the input bar.
    AddCustom(String),
    /// Re-fetch the current selection.
    Reload,
    /// A fetch finished.
    Loaded {
        token: RequestToken,
        result: Result<Vec<NormalizedTransaction>, WatchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StocksEffect {
    /// Fetch the whole feed and normalize it for `representative`.
    FetchTransactions { token: RequestToken, representative: String },
}

impl StocksState {
    pub fn new(config: &StocksConfig) -> Self {
        Self {
            selected: None,
            defaults: config.default_representatives.clone(),
            custom: Vec::new(),
            error: None,
            results: Vec::new(),
            loading: false,
            startup_name: config.startup_representative.clone(),
            started: false,
            tokens: TokenIssuer::default(),
        }
    }

    /// All buttons, defaults first.
    pub fn buttons(&self) -> impl Iterator<Item = &String> {
        self.defaults.iter().chain(self.custom.iter())
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.tokens.latest()
    }

    fn select(&mut self, name: String) -> StocksEffect {
        let token = self.tokens.issue();
        tracing::debug!(representative = %name, %token, "selecting representative");
        self.error = None;
        self.loading = true;
        self.selected = Some(name.clone());
        StocksEffect::FetchTransactions { token, representative: name }
    }
}

impl Default for StocksState {
    fn default() -> Self {
        Self::new(&StocksConfig::default())
    }
}

/// Apply `event` to `state`, returning the new state and any I/O to run.
pub fn update(mut state: StocksState, event: StocksEvent) -> (StocksState, Vec<StocksEffect>) {
    match event {
        StocksEvent::Startup => {
            if state.started {
                return (state, Vec::new());
            }
            state.started = true;
            let name = state.startup_name.clone();
            let effect = state.select(name);
            (state, vec![effect])
        }

        StocksEvent::Select(name) => {
            let effect = state.select(name);
            (state, vec![effect])
        }

        StocksEvent::AddCustom(text) => match clean_name(&text) {
            None => {
                state.error = Some(WatchError::empty_representative().to_string());
                state.results.clear();
                (state, Vec::new())
            }
            Some(name) => {
                if !contains_name(state.buttons(), &name) {
                    state.custom.push(name.clone());
                }
                let effect = state.select(name);
                (state, vec![effect])
            }
        },

        StocksEvent::Reload => match state.selected.clone() {
            Some(name) => {
                let effect = state.select(name);
                (state, vec![effect])
            }
            None => (state, Vec::new()),
        },

        StocksEvent::Loaded { token, result } => {
            if !state.tokens.is_current(token) {
                tracing::debug!(%token, latest = ?state.tokens.latest(), "discarding stale transactions");
                return (state, Vec::new());
            }
            state.loading = false;
            match result {
                Ok(results) => {
                    tracing::info!(count = results.len(), "transactions loaded");
                    state.results = results;
                    state.error = None;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "transactions failed");
                    state.results.clear();
                    state.error = Some(err.to_string());
                }
            }
            (state, Vec::new())
        }
    }
}
