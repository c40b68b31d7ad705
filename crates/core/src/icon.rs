use serde::Serialize;

/// Message shown when the icon cannot be resolved
pub const ICON_ERROR_MESSAGE: &str = "Error fetching Pokémon icon";

/// Lifecycle of a single sprite lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IconState {
    Loading,
    Ready { sprite_url: String },
    Errored { message: String },
}

impl IconState {
    pub fn is_loading(&self) -> bool {
        matches!(self, IconState::Loading)
    }
}

/// Settle a lookup into its terminal state
///
/// Both a failed request and a record without a sprite end in
/// [`IconState::Errored`] with the display message; the cause is not kept.
pub fn resolve_icon<E>(result: Result<Option<String>, E>) -> IconState {
    match result {
        Ok(Some(sprite_url)) => IconState::Ready { sprite_url },
        Ok(None) | Err(_) => IconState::Errored {
            message: ICON_ERROR_MESSAGE.to_string(),
        },
    }
}
