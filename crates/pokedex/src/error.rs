#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<pokedex_core::pokemon::ParseError> for Error {
    fn from(err: pokedex_core::pokemon::ParseError) -> Self {
        Error::Parse(err.to_string())
    }
}
