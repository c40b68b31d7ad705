//! Catalog state and its reducer
//!
//! The state only changes through [`reduce`]. Every fetch cycle is
//! `FetchStart` followed by exactly one of `FetchSuccess` or `FetchError`.

use serde::Serialize;

use crate::pokemon::Record;

/// Canonical catalog state shared by every consumer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogState {
    pub records: Vec<Record>,
    pub loading: bool,
    pub error: Option<String>,
}

/// The closed set of catalog transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch cycle began
    FetchStart,
    /// The whole batch arrived, in response order
    FetchSuccess(Vec<Record>),
    /// The cycle failed with the given message
    FetchError(String),
}

impl Action {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::FetchStart => "FETCH_START",
            Action::FetchSuccess(_) => "FETCH_SUCCESS",
            Action::FetchError(_) => "FETCH_ERROR",
        }
    }
}

/// Apply an action to a state, producing the next state
pub fn reduce(state: CatalogState, action: Action) -> CatalogState {
    match action {
        Action::FetchStart => CatalogState {
            loading: true,
            error: None,
            ..state
        },
        Action::FetchSuccess(records) => CatalogState {
            records,
            loading: false,
            error: None,
        },
        Action::FetchError(message) => CatalogState {
            error: Some(message),
            loading: false,
            ..state
        },
    }
}
