//! Category (type) names and how they are shown to the user

use serde::Serialize;

use crate::pokemon::ResourceRef;

/// Display names for the known PokéAPI types
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("normal", "Normal"),
    ("fighting", "Lucha"),
    ("flying", "Volador"),
    ("poison", "Veneno"),
    ("ground", "Tierra"),
    ("rock", "Roca"),
    ("bug", "Bicho"),
    ("ghost", "Fantasma"),
    ("steel", "Acero"),
    ("fire", "Fuego"),
    ("water", "Agua"),
    ("grass", "Planta"),
    ("electric", "Eléctrico"),
    ("psychic", "Psíquico"),
    ("ice", "Hielo"),
    ("dragon", "Dragón"),
    ("dark", "Siniestro"),
    ("fairy", "Hada"),
    ("stellar", "Estelar"),
    ("unknown", "otro"),
];

/// A filterable category with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    pub name: String,
    pub display_name: String,
}

/// Display name for a raw type name
///
/// Names outside the table are shown with their first character upper-cased.
pub fn display_name(raw: &str) -> String {
    DISPLAY_NAMES
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| capitalize(raw))
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pair each fetched type with its display name, keeping API order
pub fn build_taxonomy(types: Vec<ResourceRef>) -> Vec<TaxonomyEntry> {
    types
        .into_iter()
        .map(|t| TaxonomyEntry {
            display_name: display_name(&t.name),
            name: t.name,
        })
        .collect()
}
