use std::sync::Arc;

use pokedex_core::pagination::PageState;
use tokio::sync::watch;

/// Shared handle to the page state
///
/// `next` and `previous` report the new page only when it actually moved;
/// that is the signal for re-triggering a fetch.
#[derive(Debug, Clone)]
pub struct PaginationController {
    tx: Arc<watch::Sender<PageState>>,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(PageState::default())
    }
}

impl PaginationController {
    pub fn new(initial: PageState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn state(&self) -> PageState {
        *self.tx.borrow()
    }

    pub fn next(&self) -> Option<u32> {
        self.step(PageState::next)
    }

    pub fn previous(&self) -> Option<u32> {
        self.step(PageState::previous)
    }

    /// Jump to `page`, clamped to the valid range, keeping the known page count
    pub fn go_to(&self, page: u32) -> Option<u32> {
        self.step(|state| state.jump(page))
    }

    pub fn set_total_pages(&self, total_pages: u32) {
        self.tx.send_if_modified(|state| {
            let updated = state.with_total_pages(total_pages);
            let changed = updated != *state;
            *state = updated;
            changed
        });
    }

    fn step(&self, f: impl FnOnce(PageState) -> PageState) -> Option<u32> {
        let mut moved = None;
        self.tx.send_if_modified(|state| {
            let updated = f(*state);
            if updated.current_page == state.current_page {
                return false;
            }
            *state = updated;
            moved = Some(updated.current_page);
            true
        });
        moved
    }
}
