//! View state for the two dashboard tabs.
//!
//! Each tab is an explicit state struct plus a pure `update` function:
//! `update(state, event) -> (state, effects)`. Effects describe the I/O the
//! shell must run; their completions come back as events carrying the
//! [`RequestToken`] they were issued with, and only the latest token may
//! change what is displayed.

pub mod stocks;
pub mod weather;

pub use stocks::{StocksEffect, StocksEvent, StocksState};
pub use weather::{ForecastTarget, WeatherEffect, WeatherEvent, WeatherState};

/// Identifies one fetch. Tokens from one issuer strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out tokens and remembers the most recent one.
#[derive(Debug, Clone, Default)]
pub struct TokenIssuer {
    latest: Option<RequestToken>,
}

impl TokenIssuer {
    pub fn issue(&mut self) -> RequestToken {
        let next = RequestToken(self.latest.map_or(1, |t| t.0 + 1));
        self.latest = Some(next);
        next
    }

    pub fn latest(&self) -> Option<RequestToken> {
        self.latest
    }

    /// True when `token` is the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }
}

/// Trim user input; `None` when nothing is left.
pub(crate) fn clean_name(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Case-insensitive membership test used to avoid duplicate buttons.
pub(crate) fn contains_name<'a>(mut names: impl Iterator<Item = &'a String>, name: &str) -> bool {
    let wanted = name.to_lowercase();
    names.any(|n| n.to_lowercase() == wanted)
}
