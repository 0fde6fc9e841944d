use contracts::shared::pagination::{page_window, Page, PageQuery, PageSlot, MAX_VISIBLE_PAGES};

/// Handle of one in-flight page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub query: PageQuery,
}

/// State of a paged list screen, independent of the UI framework.
///
/// Every request is numbered; only the response to the latest request is applied, so the
/// screen always ends up showing the last page the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedListState<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub window: Vec<PageSlot>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl<T> PagedListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 0,
            window: Vec::new(),
            loading: false,
            error: None,
            seq: 0,
        }
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.current_page, self.page_size)
    }

    /// Start loading the current page
    pub fn begin_load(&mut self) -> LoadTicket {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            seq: self.seq,
            query: self.query(),
        }
    }

    /// Apply a response. Returns `false` when the ticket is stale and the response was dropped.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<Page<T>, String>) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_count = page.total_count;
                self.total_pages = page.total_pages;
            }
            Err(message) => {
                self.items.clear();
                self.error = Some(message);
            }
        }
        // a failed page still becomes the active one
        self.window = page_window(self.current_page, self.total_pages, MAX_VISIBLE_PAGES);
        true
    }

    /// Move to page `page`. `None` if it is the current page or out of range.
    pub fn go_to_page(&mut self, page: usize) -> Option<LoadTicket> {
        if page == self.current_page || page >= self.total_pages {
            return None;
        }
        self.current_page = page;
        Some(self.begin_load())
    }

    /// Change the page size and restart from the first page
    pub fn set_page_size(&mut self, page_size: usize) -> Option<LoadTicket> {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return None;
        }
        self.page_size = page_size;
        self.current_page = 0;
        Some(self.begin_load())
    }

    /// The current page no longer exists, typically after deleting its last row
    pub fn overshot(&self) -> bool {
        !self.loading
            && self.error.is_none()
            && self.items.is_empty()
            && self.total_pages > 0
            && self.current_page >= self.total_pages
    }

    /// Step back to the last existing page after [`overshot`](Self::overshot)
    pub fn step_back(&mut self) -> Option<LoadTicket> {
        if !self.overshot() {
            return None;
        }
        self.current_page = self.total_pages - 1;
        Some(self.begin_load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<i32>, total_count: usize, total_pages: usize, current: usize) -> Page<i32> {
        Page {
            items,
            total_count,
            total_pages,
            current_page: current,
        }
    }

    fn loaded(total_pages: usize) -> PagedListState<i32> {
        let mut s = PagedListState::new(10);
        let t = s.begin_load();
        s.finish(t, Ok(page(vec![1, 2, 3], total_pages * 10, total_pages, 0)));
        s
    }

    #[test]
    fn test_initial_load_replaces_items() {
        let mut s = PagedListState::new(10);
        let t = s.begin_load();
        assert!(s.loading);
        assert_eq!(t.query, PageQuery::new(0, 10));

        assert!(s.finish(t, Ok(page(vec![1, 2], 2, 1, 0))));
        assert!(!s.loading);
        assert_eq!(s.items, vec![1, 2]);
        assert_eq!(s.window, vec![PageSlot::Page(0)]);

        let t = s.begin_load();
        s.finish(t, Ok(page(vec![5], 1, 1, 0)));
        assert_eq!(s.items, vec![5]);
    }

    #[test]
    fn test_window_follows_current_page() {
        let mut s = loaded(12);
        let t = s.go_to_page(6).unwrap();
        s.finish(t, Ok(page(vec![60], 120, 12, 6)));
        let sentinels: Vec<i64> = s.window.iter().map(|p| p.sentinel()).collect();
        assert_eq!(sentinels, vec![0, -1, 4, 5, 6, 7, 8, -1, 11]);
    }

    #[test]
    fn test_window_follows_page_that_failed_to_load() {
        let mut s = loaded(12);
        let t = s.go_to_page(6).unwrap();
        s.finish(t, Err("Failed to load items.".into()));
        assert_eq!(s.current_page, 6);
        assert!(s.window.contains(&PageSlot::Page(6)));
        let sentinels: Vec<i64> = s.window.iter().map(|p| p.sentinel()).collect();
        assert_eq!(sentinels, vec![0, -1, 4, 5, 6, 7, 8, -1, 11]);
    }

    #[test]
    fn test_go_to_page_rejects_current_and_out_of_range() {
        let mut s = loaded(3);
        assert!(s.go_to_page(0).is_none());
        assert!(s.go_to_page(3).is_none());
        assert!(!s.loading);
        assert!(s.go_to_page(2).is_some());
        assert_eq!(s.current_page, 2);
    }

    #[test]
    fn test_latest_request_wins_when_responses_arrive_out_of_order() {
        let mut s = loaded(5);
        let to_two = s.go_to_page(2).unwrap();
        let to_one = s.go_to_page(1).unwrap();

        assert!(s.finish(to_one, Ok(page(vec![10, 11], 50, 5, 1))));
        assert!(!s.finish(to_two, Ok(page(vec![20, 21], 50, 5, 2))));

        assert_eq!(s.current_page, 1);
        assert_eq!(s.items, vec![10, 11]);
        assert!(!s.loading);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut s = loaded(5);
        let old = s.go_to_page(2).unwrap();
        let _new = s.go_to_page(3).unwrap();
        assert!(!s.finish(old, Ok(page(vec![20], 50, 5, 2))));
        assert!(s.loading);
    }

    #[test]
    fn test_failure_clears_items_and_keeps_totals() {
        let mut s = loaded(4);
        let t = s.go_to_page(1).unwrap();
        s.finish(t, Err("Failed to load tags.".into()));
        assert!(s.items.is_empty());
        assert_eq!(s.error.as_deref(), Some("Failed to load tags."));
        assert_eq!(s.total_pages, 4);
        assert!(!s.loading);

        s.begin_load();
        assert!(s.error.is_none());
    }

    #[test]
    fn test_set_page_size_restarts_from_first_page() {
        let mut s = loaded(4);
        let t = s.go_to_page(3).unwrap();
        s.finish(t, Ok(page(vec![1], 40, 4, 3)));

        let t = s.set_page_size(20).unwrap();
        assert_eq!(t.query, PageQuery::new(0, 20));
        assert!(s.set_page_size(20).is_none());
    }

    #[test]
    fn test_step_back_after_deleting_last_row_of_last_page() {
        let mut s = loaded(3);
        let t = s.go_to_page(2).unwrap();
        s.finish(t, Ok(page(vec![21], 21, 3, 2)));

        // the only row of page 2 was deleted; server now reports two pages
        let t = s.begin_load();
        s.finish(t, Ok(page(vec![], 20, 2, 2)));
        assert!(s.overshot());

        let t = s.step_back().unwrap();
        assert_eq!(t.query.page_index, 1);
        assert!(!s.overshot());
    }

    #[test]
    fn test_empty_collection_is_not_overshot() {
        let mut s = PagedListState::<i32>::new(10);
        let t = s.begin_load();
        s.finish(t, Ok(page(vec![], 0, 0, 0)));
        assert!(!s.overshot());
        assert!(s.window.is_empty());
    }
}
