use std::sync::Arc;

use futures::future::try_join_all;
use pokedex_core::pagination::{
    offset_for_page, total_pages, ASSUMED_TOTAL_RECORDS, LIST_LIMIT, PAGE_SIZE,
};
use pokedex_core::pokemon::Record;
use pokedex_core::sequence::RequestSequencer;
use pokedex_core::store::Action;
use serde::Serialize;

use crate::client::CatalogApi;
use crate::error::Error;
use crate::pagination::PaginationController;
use crate::store::CatalogStore;

/// How a page load settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// The batch was stored
    Loaded { page: u32, count: usize },
    /// The batch failed and the error was stored
    Failed { page: u32, message: String },
    /// A newer load was issued before this one settled; nothing was stored
    Discarded { page: u32 },
}

/// Runs one fetch cycle per page change
///
/// `FetchStart` is dispatched on entry. The index page is fetched, then every
/// detail concurrently; the batch is all-or-nothing. Only the most recently
/// issued load may dispatch its terminal action.
pub struct FetchOrchestrator {
    client: Arc<dyn CatalogApi>,
    store: CatalogStore,
    pages: PaginationController,
    sequencer: RequestSequencer,
}

impl FetchOrchestrator {
    pub fn new(
        client: Arc<dyn CatalogApi>,
        store: CatalogStore,
        pages: PaginationController,
    ) -> Self {
        Self {
            client,
            store,
            pages,
            sequencer: RequestSequencer::new(),
        }
    }

    pub async fn load_page(&self, page: u32) -> FetchOutcome {
        let ticket = self.sequencer.issue();
        log::debug!("load page {page} (request #{})", ticket.number());

        self.store.dispatch(Action::FetchStart);

        let result = self.fetch_batch(page).await;

        if !self.sequencer.is_current(ticket) {
            log::debug!(
                "discarding page {page} (request #{}): superseded",
                ticket.number()
            );
            return FetchOutcome::Discarded { page };
        }

        match result {
            Ok(records) => {
                let count = records.len();
                log::info!("loaded {count} records for page {page}");
                self.store.dispatch(Action::FetchSuccess(records));
                self.pages
                    .set_total_pages(total_pages(ASSUMED_TOTAL_RECORDS, PAGE_SIZE));
                FetchOutcome::Loaded { page, count }
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("failed to load page {page}: {message}");
                self.store.dispatch(Action::FetchError(message.clone()));
                FetchOutcome::Failed { page, message }
            }
        }
    }

    async fn fetch_batch(&self, page: u32) -> Result<Vec<Record>, Error> {
        let offset = offset_for_page(page, PAGE_SIZE);
        let refs = self.client.fetch_page(offset, LIST_LIMIT).await?;

        log::debug!("fetching {} details for page {page}", refs.len());

        let details = refs.iter().map(|r| self.client.fetch_detail(&r.url));
        try_join_all(details).await
    }
}
