#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod browse;
mod client;
mod error;
mod icon;
mod list;
mod orchestrator;
mod pagination;
mod prelude;
mod render;
mod session;
mod store;
mod types;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the PokéAPI catalog from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PokéAPI base URL
    #[clap(long, env = "POKEAPI_BASE_URL", global = true)]
    api_base: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn api_config(&self) -> client::ApiConfig {
        client::ApiConfig::default().with_base_url(self.api_base.clone())
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List one page of Pokémon
    List(crate::list::ListOptions),

    /// List the types available as filters
    Types(crate::types::TypesOptions),

    /// Resolve the sprite for one Pokémon
    Icon(crate::icon::IconOptions),

    /// Page through the catalog interactively
    Browse(crate::browse::BrowseOptions),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Types(options) => crate::types::run(options, app.global).await,
        SubCommands::Icon(options) => crate::icon::run(options, app.global).await,
        SubCommands::Browse(options) => crate::browse::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
