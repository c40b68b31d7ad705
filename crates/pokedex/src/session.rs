use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pokedex_core::filter::{filter_records, FilterSelection};
use pokedex_core::icon::IconState;
use pokedex_core::pokemon::Record;
use pokedex_core::taxonomy::{build_taxonomy, TaxonomyEntry};
use pokedex_core::view::{build_catalog_view, CatalogView};
use tokio::task::JoinHandle;

use crate::client::CatalogApi;
use crate::error::Error;
use crate::icon::DetailFetchIcon;
use crate::orchestrator::{FetchOrchestrator, FetchOutcome};
use crate::pagination::PaginationController;
use crate::store::CatalogStore;

/// Composition root for one catalog screen
///
/// Owns the single store, page state, orchestrator and icon, all built over
/// the same client. Consumers get handles from here instead of reaching for
/// globals.
pub struct CatalogSession {
    client: Arc<dyn CatalogApi>,
    store: CatalogStore,
    pages: PaginationController,
    orchestrator: Arc<FetchOrchestrator>,
    icon: Arc<DetailFetchIcon>,
    filter: Mutex<FilterSelection>,
    taxonomy: Mutex<Vec<TaxonomyEntry>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CatalogSession {
    pub fn new(client: Arc<dyn CatalogApi>) -> Self {
        let store = CatalogStore::new();
        let pages = PaginationController::default();
        let orchestrator = Arc::new(FetchOrchestrator::new(
            client.clone(),
            store.clone(),
            pages.clone(),
        ));
        let icon = Arc::new(DetailFetchIcon::new(client.clone()));

        Self {
            client,
            store,
            pages,
            orchestrator,
            icon,
            filter: Mutex::new(FilterSelection::none()),
            taxonomy: Mutex::new(Vec::new()),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn pages(&self) -> &PaginationController {
        &self.pages
    }

    /// Fetch the type list once and keep it for the filter control
    pub async fn load_taxonomy(&self) -> Result<Vec<TaxonomyEntry>, Error> {
        let entries = build_taxonomy(self.client.fetch_taxonomy().await?);
        *lock(&self.taxonomy) = entries.clone();
        Ok(entries)
    }

    /// Initial load: type list and header icon side by side, then the current page
    ///
    /// A failed type list only leaves the filter control empty; a failed icon
    /// stays in the icon's own state.
    pub async fn mount(&self, header_icon: &str) -> (FetchOutcome, IconState) {
        let (taxonomy, icon) = tokio::join!(self.load_taxonomy(), self.icon.request(header_icon));
        if let Err(err) = taxonomy {
            log::warn!("failed to load type list: {err}");
        }

        let outcome = self.go_to(self.pages.state().current_page).await;
        (outcome, icon)
    }

    /// Move to `page` and load it, even if it is already current
    pub async fn go_to(&self, page: u32) -> FetchOutcome {
        self.pages.go_to(page);
        self.orchestrator
            .load_page(self.pages.state().current_page)
            .await
    }

    /// Advance one page and start loading it; `None` on the last page
    pub fn next_page(&self) -> Option<JoinHandle<FetchOutcome>> {
        self.pages.next().map(|page| self.spawn_load(page))
    }

    /// Go back one page and start loading it; `None` on the first page
    pub fn previous_page(&self) -> Option<JoinHandle<FetchOutcome>> {
        self.pages.previous().map(|page| self.spawn_load(page))
    }

    /// Start loading the current page again
    pub fn reload(&self) -> JoinHandle<FetchOutcome> {
        self.spawn_load(self.pages.state().current_page)
    }

    fn spawn_load(&self, page: u32) -> JoinHandle<FetchOutcome> {
        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move { orchestrator.load_page(page).await })
    }

    pub fn set_filter(&self, selection: FilterSelection) {
        log::debug!("filter set to {:?}", selection.as_deref());
        *lock(&self.filter) = selection;
    }

    pub fn filter(&self) -> FilterSelection {
        lock(&self.filter).clone()
    }

    pub fn taxonomy(&self) -> Vec<TaxonomyEntry> {
        lock(&self.taxonomy).clone()
    }

    /// Records passing the current filter, recomputed from the latest state
    pub fn visible_records(&self) -> Vec<Record> {
        let state = self.store.state();
        filter_records(&state.records, &self.filter())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn view(&self) -> CatalogView {
        build_catalog_view(&self.store.state(), &self.filter(), &self.pages.state())
    }
}
