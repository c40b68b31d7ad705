use std::sync::Arc;

use pokedex_core::filter::FilterSelection;
use pokedex_core::pagination::MAX_PAGE;
use pokedex_core::view::CatalogView;

use crate::client::{CatalogApi, PokeApiClient};
use crate::prelude::{eprintln, println, *};
use crate::render::format_catalog_text;
use crate::session::CatalogSession;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(
        short,
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE))
    )]
    pub page: u32,

    /// Only show Pokémon with this type or ability
    #[arg(short, long, value_name = "NAME")]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching page {} from {}...", options.page, global.api_config().base_url);
    }

    let view = list_data(
        options.page,
        options.filter.clone(),
        Arc::new(PokeApiClient::new(global.api_config())),
    )
    .await?;

    if options.json {
        println!("{}", format_list_json(&view)?);
    } else {
        print!("{}", format_catalog_text(&view, true));
    }

    Ok(())
}

/// Loads one catalog page and returns the filtered frame
pub async fn list_data(
    page: u32,
    filter: Option<String>,
    client: Arc<dyn CatalogApi>,
) -> Result<CatalogView> {
    let session = CatalogSession::new(client);
    session.set_filter(FilterSelection::from(filter));
    session.go_to(page).await;

    let view = session.view();
    if let Some(error) = &view.error {
        return Err(eyre!("Failed to load page {}: {}", page, error));
    }

    Ok(view)
}

/// Convert a catalog frame to JSON string
fn format_list_json(view: &CatalogView) -> Result<String> {
    serde_json::to_string_pretty(view).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
