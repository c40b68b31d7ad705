use std::sync::{Arc, Mutex, PoisonError};

use colored::Colorize;
use pokedex_core::icon::{resolve_icon, IconState};
use pokedex_core::sequence::RequestSequencer;
use tokio::sync::watch;

use crate::client::{ApiConfig, CatalogApi, PokeApiClient};
use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct IconOptions {
    /// Pokémon name (or id) to resolve the sprite for
    #[arg(value_name = "NAME", default_value = "pikachu")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Sprite lookup for a single named record
///
/// Independent of the catalog store: it has its own state channel and a
/// failure here never reaches the catalog. Requesting a different name
/// restarts the lifecycle; requesting the same name again does nothing.
pub struct DetailFetchIcon {
    client: Arc<dyn CatalogApi>,
    tx: watch::Sender<IconState>,
    requested: Mutex<Option<String>>,
    sequencer: RequestSequencer,
}

impl DetailFetchIcon {
    pub fn new(client: Arc<dyn CatalogApi>) -> Self {
        let (tx, _rx) = watch::channel(IconState::Loading);
        Self {
            client,
            tx,
            requested: Mutex::new(None),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn state(&self) -> IconState {
        self.tx.borrow().clone()
    }

    /// Resolve the sprite for `name`, returning the state this call settled in
    pub async fn request(&self, name: &str) -> IconState {
        let ticket = {
            let mut requested = self
                .requested
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if requested.as_deref() == Some(name) {
                return self.state();
            }
            *requested = Some(name.to_string());
            // Tickets are issued and checked under this guard so order matches requests
            let ticket = self.sequencer.issue();
            self.tx.send_replace(IconState::Loading);
            ticket
        };

        let result = self.client.fetch_by_name(name).await;
        if let Err(err) = &result {
            log::warn!("failed to fetch icon for {name}: {err}");
        }

        let state = resolve_icon(result.map(|record| record.sprite_url));
        let _requested = self
            .requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.sequencer.is_current(ticket) {
            self.tx.send_replace(state.clone());
        } else {
            log::debug!("discarding icon for {name}: superseded");
        }
        state
    }
}

pub async fn run(options: IconOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching sprite for {}...", options.name);
    }

    let state = icon_data(options.name.clone(), global.api_config()).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", format_icon_text(&options.name, &state));
    }

    Ok(())
}

/// Resolves the sprite for `name` and returns its terminal state
pub async fn icon_data(name: String, config: ApiConfig) -> IconState {
    let icon = DetailFetchIcon::new(Arc::new(PokeApiClient::new(config)));
    icon.request(&name).await
}

fn format_icon_text(name: &str, state: &IconState) -> String {
    match state {
        IconState::Loading => format!("{}\n", "Loading...".yellow()),
        IconState::Ready { sprite_url } => {
            format!("{}: {}\n", name.bold(), sprite_url.cyan().underline())
        }
        IconState::Errored { message } => format!("{}: {}\n", name.bold(), message.red()),
    }
}
