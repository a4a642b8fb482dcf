//! Error taxonomy shared by the pipeline, the feeds and the view state.
//!
//! The `Display` text of each variant is exactly what the UI shows to the
//! user, so messages are written as sentences.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WatchError {
    /// Transport failure or a non-success HTTP status.
    #[error("{message}")]
    Fetch { message: String },

    /// The response body was not the JSON we expected.
    #[error("Failed to read {what}: {detail}")]
    Parse { what: String, detail: String },

    /// No representative / city matched the requested name.
    #[error("No {kind} found for \"{name}\". Please enter a valid {entity}.")]
    NotFound {
        kind: &'static str,
        entity: &'static str,
        name: String,
    },

    /// The user submitted an empty name.
    #[error("Please enter a valid {entity} name.")]
    Input { entity: &'static str },
}

impl WatchError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch { message: message.into() }
    }

    pub fn parse(what: impl Into<String>, detail: impl ToString) -> Self {
        Self::Parse { what: what.into(), detail: detail.to_string() }
    }

    /// No disclosures matched the representative name.
    pub fn no_transactions(name: impl Into<String>) -> Self {
        Self::NotFound { kind: "transactions", entity: "representative", name: name.into() }
    }

    /// Geocoding returned no location for the city name.
    pub fn no_city(name: impl Into<String>) -> Self {
        Self::NotFound { kind: "location", entity: "city", name: name.into() }
    }

    pub fn empty_representative() -> Self {
        Self::Input { entity: "representative" }
    }

    pub fn empty_city() -> Self {
        Self::Input { entity: "city" }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
