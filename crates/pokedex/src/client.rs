use async_trait::async_trait;
use pokedex_core::pokemon::{parse_detail, parse_page, parse_taxonomy, Record, ResourceRef};

use crate::error::Error;

/// PokéAPI configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Public PokéAPI v2 base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";

    /// Apply a CLI/env override to the base URL
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Remote catalog operations
///
/// A single failed call fails the operation; nothing here retries.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Item references for one index page
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<ResourceRef>, Error>;

    /// Full record behind a reference URL
    async fn fetch_detail(&self, url: &str) -> Result<Record, Error>;

    /// Full record looked up by name
    async fn fetch_by_name(&self, name: &str) -> Result<Record, Error>;

    /// All category (type) references
    async fn fetch_taxonomy(&self) -> Result<Vec<ResourceRef>, Error>;
}

/// [`CatalogApi`] over HTTP
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PokeApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// GET `url` and return the body, mapping transport and status failures
    async fn get_text(&self, url: &str) -> Result<String, Error> {
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Failed to fetch {url}: HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read {url}: {e}")))
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<ResourceRef>, Error> {
        let url = format!(
            "{}/pokemon?limit={limit}&offset={offset}",
            self.config.base()
        );
        let body = self.get_text(&url).await?;
        Ok(parse_page(&body)?)
    }

    async fn fetch_detail(&self, url: &str) -> Result<Record, Error> {
        let body = self.get_text(url).await?;
        Ok(parse_detail(&body)?)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Record, Error> {
        let url = format!(
            "{}/pokemon/{}",
            self.config.base(),
            urlencoding::encode(name)
        );
        self.fetch_detail(&url).await
    }

    async fn fetch_taxonomy(&self) -> Result<Vec<ResourceRef>, Error> {
        let url = format!("{}/type", self.config.base());
        let body = self.get_text(&url).await?;
        Ok(parse_taxonomy(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn detail_json(id: u32, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": format!("https://img/{id}.png") },
            "species": { "name": name },
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
            "abilities": [{ "ability": { "name": "static", "url": "" }, "is_hidden": false }],
            "weight": 60,
            "height": 4,
            "base_experience": 112
        })
    }

    fn client_for(server: &MockServer) -> PokeApiClient {
        PokeApiClient::new(ApiConfig::default().with_base_url(Some(server.uri())))
    }

    #[test]
    fn test_config_override() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, ApiConfig::DEFAULT_BASE_URL);

        let config = config.with_base_url(Some("http://localhost:8080/".to_string()));
        assert_eq!(config.base(), "http://localhost:8080");

        let config = config.with_base_url(None);
        assert_eq!(config.base_url, "http://localhost:8080/");
    }

    #[tokio::test]
    async fn test_fetch_page_sends_limit_and_offset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("limit", "80"))
            .and(query_param("offset", "40"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1302,
                "results": [
                    { "name": "pikachu", "url": format!("{}/pokemon/25", server.uri()) },
                    { "name": "raichu", "url": format!("{}/pokemon/26", server.uri()) }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let refs = client_for(&server).fetch_page(40, 80).await.unwrap();

        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "pikachu");
        assert_eq!(refs[1].url, format!("{}/pokemon/26", server.uri()));
    }

    #[tokio::test]
    async fn test_fetch_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(25, "pikachu")))
            .mount(&server)
            .await;

        let url = format!("{}/pokemon/25", server.uri());
        let record = client_for(&server).fetch_detail(&url).await.unwrap();

        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.types, vec!["electric"]);
        assert_eq!(record.abilities, vec!["static"]);
        assert_eq!(record.sprite_url.as_deref(), Some("https://img/25.png"));
    }

    #[tokio::test]
    async fn test_fetch_detail_http_error_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/9999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/pokemon/9999", server.uri());
        let err = client_for(&server).fetch_detail(&url).await.unwrap_err();

        match err {
            Error::Network(message) => assert!(message.contains("HTTP 404")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_detail_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .mount(&server)
            .await;

        let url = format!("{}/pokemon/1", server.uri());
        let err = client_for(&server).fetch_detail(&url).await.unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(25, "pikachu")))
            .expect(1)
            .mount(&server)
            .await;

        let record = client_for(&server).fetch_by_name("pikachu").await.unwrap();

        assert_eq!(record.id, 25);
    }

    #[tokio::test]
    async fn test_fetch_taxonomy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/type"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "results": [
                    { "name": "normal", "url": "" },
                    { "name": "fighting", "url": "" }
                ]
            })))
            .mount(&server)
            .await;

        let types = client_for(&server).fetch_taxonomy().await.unwrap();

        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["normal", "fighting"]);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = PokeApiClient::new(
            ApiConfig::default().with_base_url(Some("http://127.0.0.1:1".to_string())),
        );

        let err = client.fetch_taxonomy().await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
    }
}
