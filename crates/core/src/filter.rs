use serde::Serialize;

use crate::pokemon::Record;

/// The user's filter choice: a type or ability name, or nothing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection(Option<String>);

impl FilterSelection {
    pub fn none() -> Self {
        Self(None)
    }

    /// Build a selection, treating an empty string as "no filter"
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value))
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<String>> for FilterSelection {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

impl Record {
    /// Exact, case-sensitive match against one of the record's types or abilities
    pub fn matches(&self, selection: &FilterSelection) -> bool {
        match selection.as_deref() {
            None => true,
            Some(name) => {
                self.types.iter().any(|t| t == name) || self.abilities.iter().any(|a| a == name)
            }
        }
    }
}

/// Records visible under `selection`, in input order
pub fn filter_records<'a>(records: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
    records.iter().filter(|r| r.matches(selection)).collect()
}
