use serde::Serialize;

use crate::filter::{filter_records, FilterSelection};
use crate::pagination::PageState;
use crate::pokemon::Record;
use crate::store::CatalogState;
use crate::taxonomy::display_name;

/// One rendered card
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub species: String,
    pub types: Vec<String>,
    pub weight_kg: f64,
    pub height_m: f64,
    pub base_experience: Option<u32>,
    pub abilities: String,
}

/// Pagination metadata with navigation commands
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PageView {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Everything a renderer needs for one frame of the catalog
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CatalogView {
    pub loading: bool,
    pub error: Option<String>,
    pub filter: Option<String>,
    pub total_records: usize,
    pub items: Vec<CardView>,
    pub pagination: PageView,
}

/// Build a card from a record, converting source units
pub fn card_view(record: &Record) -> CardView {
    CardView {
        id: record.id,
        name: record.name.clone(),
        image: record.sprite_url.clone(),
        species: record.species.clone(),
        types: record.types.iter().map(|t| display_name(t)).collect(),
        weight_kg: record.weight_kg(),
        height_m: record.height_m(),
        base_experience: record.base_experience,
        abilities: record.abilities_label(),
    }
}

/// Build pagination metadata for `pages`
pub fn page_view(pages: &PageState) -> PageView {
    let next_page_command = pages
        .has_next()
        .then(|| format!("pokedex list --page {}", pages.current_page + 1));
    let prev_page_command = pages
        .has_previous()
        .then(|| format!("pokedex list --page {}", pages.current_page - 1));

    PageView {
        current_page: pages.current_page,
        total_pages: pages.total_pages,
        has_previous: pages.has_previous(),
        has_next: pages.has_next(),
        next_page_command,
        prev_page_command,
    }
}

/// Derive the visible catalog from the store snapshot, filter and page state
pub fn build_catalog_view(
    state: &CatalogState,
    selection: &FilterSelection,
    pages: &PageState,
) -> CatalogView {
    let items = filter_records(&state.records, selection)
        .into_iter()
        .map(card_view)
        .collect();

    CatalogView {
        loading: state.loading,
        error: state.error.clone(),
        filter: selection.as_deref().map(str::to_string),
        total_records: state.records.len(),
        items,
        pagination: page_view(pages),
    }
}
