//! In-memory [`CatalogApi`] used by the shell tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pokedex_core::pokemon::{Record, ResourceRef};
use tokio::sync::Notify;

use crate::client::CatalogApi;
use crate::error::Error;

pub fn detail_url(id: u32) -> String {
    format!("fake://pokemon/{id}")
}

pub fn record(id: u32) -> Record {
    Record {
        id,
        name: format!("pokemon-{id}"),
        sprite_url: Some(format!("https://img/{id}.png")),
        species: format!("pokemon-{id}"),
        types: vec!["normal".to_string()],
        abilities: vec!["run-away".to_string()],
        weight: 10,
        height: 10,
        base_experience: Some(50),
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    pages: HashMap<u32, Vec<u32>>,
    failing: HashMap<u32, Error>,
    delays: HashMap<u32, u64>,
    page_gates: HashMap<u32, Arc<Notify>>,
    named: HashMap<String, Result<Record, Error>>,
    name_gates: HashMap<String, Arc<Notify>>,
    types: Option<Vec<String>>,
    page_requests: Mutex<Vec<(u32, u32)>>,
    name_requests: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `ids` for the index page at `offset`
    pub fn with_page(mut self, offset: u32, ids: &[u32]) -> Self {
        self.pages.insert(offset, ids.to_vec());
        self
    }

    pub fn failing_detail(mut self, id: u32, err: Error) -> Self {
        self.failing.insert(id, err);
        self
    }

    pub fn with_delay(mut self, id: u32, millis: u64) -> Self {
        self.delays.insert(id, millis);
        self
    }

    /// Hold the index page at `offset` until [`FakeCatalog::release_page`]
    pub fn gated_page(mut self, offset: u32) -> Self {
        self.page_gates.insert(offset, Arc::new(Notify::new()));
        self
    }

    pub fn with_named(mut self, name: &str, result: Result<Record, Error>) -> Self {
        self.named.insert(name.to_string(), result);
        self
    }

    /// Hold lookups of `name` until [`FakeCatalog::release_name`]
    pub fn gated_name(mut self, name: &str) -> Self {
        self.name_gates.insert(name.to_string(), Arc::new(Notify::new()));
        self
    }

    pub fn with_types(mut self, names: &[&str]) -> Self {
        self.types = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn release_page(&self, offset: u32) {
        if let Some(gate) = self.page_gates.get(&offset) {
            gate.notify_one();
        }
    }

    pub fn release_name(&self, name: &str) {
        if let Some(gate) = self.name_gates.get(name) {
            gate.notify_one();
        }
    }

    pub fn page_requests(&self) -> Vec<(u32, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn name_requests(&self) -> Vec<String> {
        self.name_requests.lock().unwrap().clone()
    }

    /// Yield until the index page at `offset` has been requested
    pub async fn wait_for_page_request(&self, offset: u32) {
        while !self.page_requests().iter().any(|(o, _)| *o == offset) {
            tokio::task::yield_now().await;
        }
    }

    /// Yield until `name` has been looked up
    pub async fn wait_for_name_request(&self, name: &str) {
        while !self.name_requests().iter().any(|n| n == name) {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<ResourceRef>, Error> {
        self.page_requests.lock().unwrap().push((offset, limit));

        if let Some(gate) = self.page_gates.get(&offset).cloned() {
            gate.notified().await;
        }

        let ids = self
            .pages
            .get(&offset)
            .ok_or_else(|| Error::Network(format!("no page at offset {offset}")))?;

        Ok(ids
            .iter()
            .map(|id| ResourceRef {
                name: format!("pokemon-{id}"),
                url: detail_url(*id),
            })
            .collect())
    }

    async fn fetch_detail(&self, url: &str) -> Result<Record, Error> {
        let id: u32 = url
            .trim_start_matches("fake://pokemon/")
            .parse()
            .map_err(|_| Error::Parse(format!("bad fake url {url}")))?;

        if let Some(millis) = self.delays.get(&id) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }

        match self.failing.get(&id) {
            Some(err) => Err(err.clone()),
            None => Ok(record(id)),
        }
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Record, Error> {
        self.name_requests.lock().unwrap().push(name.to_string());

        if let Some(gate) = self.name_gates.get(name).cloned() {
            gate.notified().await;
        }

        self.named
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(Error::Network(format!("HTTP 404 for {name}"))))
    }

    async fn fetch_taxonomy(&self) -> Result<Vec<ResourceRef>, Error> {
        let types = self
            .types
            .as_ref()
            .ok_or_else(|| Error::Network("type list unavailable".to_string()))?;

        Ok(types
            .iter()
            .map(|name| ResourceRef {
                name: name.clone(),
                url: String::new(),
            })
            .collect())
    }
}
