use serde::{Deserialize, Serialize};

/// Error raised when an API body does not have the expected shape
#[derive(Debug, thiserror::Error)]
#[error("Unexpected {what} response: {source}")]
pub struct ParseError {
    pub what: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Named reference returned by PokéAPI list endpoints (`{name, url}`)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// Paged list response from `/pokemon` and `/type`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NamedResourceList {
    /// Total reported by the server. Not used for paging.
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<ResourceRef>,
}

/// Detail response from `/pokemon/{id or name}`
///
/// Only the fields the catalog renders are deserialized; everything else in
/// the (very large) payload is ignored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub species: NamedRef,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub weight: u32,
    pub height: u32,
    pub base_experience: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AbilitySlot {
    pub ability: NamedRef,
}

/// One catalog entry, as owned by the store
///
/// `weight` is in hectograms and `height` in decimetres, as PokéAPI reports
/// them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    pub species: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub weight: u32,
    pub height: u32,
    pub base_experience: Option<u32>,
}

impl Record {
    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Height in metres
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Ability names joined with `", "`
    pub fn abilities_label(&self) -> String {
        self.abilities.join(", ")
    }
}

impl From<PokemonDetail> for Record {
    fn from(detail: PokemonDetail) -> Self {
        Record {
            id: detail.id,
            name: detail.name,
            sprite_url: detail.sprites.front_default,
            species: detail.species.name,
            types: detail.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: detail.abilities.into_iter().map(|a| a.ability.name).collect(),
            weight: detail.weight,
            height: detail.height,
            base_experience: detail.base_experience,
        }
    }
}

/// Parse a `/pokemon?limit=&offset=` body into its item references
pub fn parse_page(body: &str) -> Result<Vec<ResourceRef>, ParseError> {
    serde_json::from_str::<NamedResourceList>(body)
        .map(|list| list.results)
        .map_err(|source| ParseError {
            what: "pokemon list",
            source,
        })
}

/// Parse a `/pokemon/{id}` body into a [`Record`]
pub fn parse_detail(body: &str) -> Result<Record, ParseError> {
    serde_json::from_str::<PokemonDetail>(body)
        .map(Record::from)
        .map_err(|source| ParseError {
            what: "pokemon detail",
            source,
        })
}

/// Parse a `/type` body into the ordered taxonomy references
pub fn parse_taxonomy(body: &str) -> Result<Vec<ResourceRef>, ParseError> {
    serde_json::from_str::<NamedResourceList>(body)
        .map(|list| list.results)
        .map_err(|source| ParseError {
            what: "type list",
            source,
        })
}
