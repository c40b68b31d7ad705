//! Page arithmetic for the catalog
//!
//! The list endpoint is queried with `LIST_LIMIT` items while offsets and the
//! page count advance by `PAGE_SIZE`. The page count is derived from a fixed
//! assumed total rather than the count the server reports.

use serde::Serialize;

/// Records per page used for offsets and the page count
pub const PAGE_SIZE: u32 = 40;

/// `limit` sent to the list endpoint
pub const LIST_LIMIT: u32 = 80;

/// Total number of records the page count is computed against
pub const ASSUMED_TOTAL_RECORDS: u32 = 800;

/// Highest page a caller may jump to
pub const MAX_PAGE: u32 = ASSUMED_TOTAL_RECORDS.div_ceil(PAGE_SIZE);

/// Number of pages needed to show `total_records` at `page_size` per page
pub fn total_pages(total_records: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

/// List offset for a 1-indexed page
///
/// Saturates instead of overflowing for pages far past the end.
pub fn offset_for_page(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Current page and known page count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl PageState {
    /// Start at `page` (clamped to `1..=MAX_PAGE`) with an unknown page count
    pub fn at(page: u32) -> Self {
        Self::default().jump(page)
    }

    /// Jump straight to `page`, clamped to the first and last page
    ///
    /// The upper bound is the known page count, or [`MAX_PAGE`] while it is
    /// still unknown.
    pub fn jump(self, page: u32) -> Self {
        let last = if self.total_pages == 0 {
            MAX_PAGE
        } else {
            self.total_pages
        };
        Self {
            current_page: page.clamp(1, last),
            ..self
        }
    }

    /// Move forward one page, staying put on the last known page
    ///
    /// While the page count is still unknown (0) this is a no-op.
    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                current_page: self.current_page + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Move back one page, never below 1
    pub fn previous(self) -> Self {
        Self {
            current_page: self.current_page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn with_total_pages(self, total_pages: u32) -> Self {
        Self {
            total_pages,
            ..self
        }
    }

    /// List offset for the current page
    pub fn offset(&self) -> u32 {
        offset_for_page(self.current_page, PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current_page: u32, total_pages: u32) -> PageState {
        PageState {
            current_page,
            total_pages,
        }
    }

    #[test]
    fn test_total_pages_assumed_total() {
        assert_eq!(total_pages(ASSUMED_TOTAL_RECORDS, PAGE_SIZE), 20);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(801, 40), 21);
        assert_eq!(total_pages(1, 40), 1);
        assert_eq!(total_pages(0, 40), 0);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(800, 0), 0);
    }

    #[test]
    fn test_offset_for_page() {
        assert_eq!(offset_for_page(1, PAGE_SIZE), 0);
        assert_eq!(offset_for_page(2, PAGE_SIZE), 40);
        assert_eq!(offset_for_page(20, PAGE_SIZE), 760);
        assert_eq!(offset_for_page(0, PAGE_SIZE), 0);
    }

    #[test]
    fn test_offset_for_page_saturates() {
        assert_eq!(offset_for_page(u32::MAX, PAGE_SIZE), u32::MAX);
        assert_eq!(offset_for_page(MAX_PAGE, PAGE_SIZE), 760);
    }

    #[test]
    fn test_max_page_matches_total_pages() {
        assert_eq!(MAX_PAGE, total_pages(ASSUMED_TOTAL_RECORDS, PAGE_SIZE));
    }

    #[test]
    fn test_jump_clamps_to_last_page() {
        assert_eq!(page(1, 20).jump(25), page(20, 20));
        assert_eq!(page(1, 20).jump(7), page(7, 20));
        assert_eq!(page(5, 20).jump(0), page(1, 20));
    }

    #[test]
    fn test_jump_with_unknown_total_uses_max_page() {
        assert_eq!(page(1, 0).jump(u32::MAX), page(MAX_PAGE, 0));
        assert!(!page(1, 0).jump(u32::MAX).has_next());
    }

    #[test]
    fn test_default_state() {
        let state = PageState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_at_clamps_to_first_page() {
        assert_eq!(PageState::at(0).current_page, 1);
        assert_eq!(PageState::at(7).current_page, 7);
        assert_eq!(PageState::at(25).current_page, MAX_PAGE);
    }

    #[test]
    fn test_next_advances() {
        assert_eq!(page(3, 20).next(), page(4, 20));
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        assert_eq!(page(20, 20).next(), page(20, 20));
    }

    #[test]
    fn test_next_with_unknown_total_is_noop() {
        assert_eq!(page(1, 0).next(), page(1, 0));
    }

    #[test]
    fn test_previous_goes_back() {
        assert_eq!(page(5, 20).previous(), page(4, 20));
    }

    #[test]
    fn test_previous_at_first_page_is_noop() {
        assert_eq!(page(1, 20).previous(), page(1, 20));
    }

    #[test]
    fn test_boundaries() {
        let first = page(1, 20);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = page(20, 20);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_with_total_pages_keeps_current_page() {
        let state = page(7, 0).with_total_pages(20);
        assert_eq!(state, page(7, 20));
    }

    #[test]
    fn test_offset_follows_page_size_not_list_limit() {
        assert_eq!(page(3, 20).offset(), 80);
        assert_ne!(PAGE_SIZE, LIST_LIMIT);
    }
}
