use std::sync::Arc;

use pokedex_core::store::{reduce, Action, CatalogState};
use tokio::sync::watch;

/// Shared handle to the catalog state
///
/// Constructed once by the session and cloned into every consumer. All
/// mutation goes through [`CatalogStore::dispatch`]; readers either take a
/// snapshot or subscribe to every transition.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    tx: Arc<watch::Sender<CatalogState>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CatalogState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Apply `action` through the reducer and notify subscribers
    pub fn dispatch(&self, action: Action) {
        log::debug!("dispatch {}", action.kind());
        self.tx.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    /// Snapshot of the current state
    pub fn state(&self) -> CatalogState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every dispatched transition
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.tx.subscribe()
    }
}
