use std::sync::Arc;

use pokedex_core::taxonomy::TaxonomyEntry;

use crate::client::{CatalogApi, PokeApiClient};
use crate::prelude::{eprintln, println, *};
use crate::render::format_taxonomy_table;
use crate::session::CatalogSession;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TypesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TypesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching type list...");
    }

    let entries = types_data(Arc::new(PokeApiClient::new(global.api_config()))).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        format_taxonomy_table(&entries).printstd();
    }

    Ok(())
}

/// Fetches every filterable type with its display name
pub async fn types_data(client: Arc<dyn CatalogApi>) -> Result<Vec<TaxonomyEntry>> {
    CatalogSession::new(client)
        .load_taxonomy()
        .await
        .map_err(|e| eyre!("Failed to load type list: {}", e))
}
