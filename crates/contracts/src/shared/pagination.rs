//! Paged collection responses and the page-number window shown by list screens.

use serde::{Deserialize, Serialize};

/// Number of consecutive page buttons rendered around the current page
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of a collection endpoint.
///
/// `total_pages` is computed by the server as `ceil(total_count / page_size)`;
/// the client trusts it as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub current_page: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// Query parameters of `GET /{resource}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageQuery {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Smallest possible probe, used by usage checks
    pub fn probe() -> Self {
        Self::new(0, 1)
    }

    pub fn to_params(&self) -> [(&'static str, String); 2] {
        [
            ("pageIndex", self.page_index.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

/// Entry of a page window: a clickable page index or an elision marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

impl PageSlot {
    /// Numeric encoding where the gap is `-1`
    pub fn sentinel(&self) -> i64 {
        match self {
            PageSlot::Page(index) => *index as i64,
            PageSlot::Gap => -1,
        }
    }

    pub fn page(&self) -> Option<usize> {
        match self {
            PageSlot::Page(index) => Some(*index),
            PageSlot::Gap => None,
        }
    }
}

/// Computes the page buttons to render for `current_page` (0-based).
///
/// Up to `max_visible` pages are listed verbatim. Beyond that a window starting two
/// pages before the current one is shown, framed by the first and last pages with
/// gap markers where pages are skipped. A `current_page` past the end is treated as
/// the last page.
pub fn page_window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageSlot> {
    if total_pages <= max_visible {
        return (0..total_pages).map(PageSlot::Page).collect();
    }

    let current = current_page.min(total_pages - 1);
    let start = current.saturating_sub(2);
    let end = total_pages.min(start + max_visible);

    let mut slots = Vec::with_capacity(max_visible + 4);
    if start > 0 {
        slots.push(PageSlot::Page(0));
    }
    if start > 1 {
        slots.push(PageSlot::Gap);
    }
    slots.extend((start..end).map(PageSlot::Page));
    if end < total_pages - 1 {
        slots.push(PageSlot::Gap);
    }
    if end < total_pages {
        slots.push(PageSlot::Page(total_pages - 1));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Gap, Page as P};

    fn sentinels(slots: &[PageSlot]) -> Vec<i64> {
        slots.iter().map(PageSlot::sentinel).collect()
    }

    #[test]
    fn test_small_totals_list_every_page() {
        for total in 0..=MAX_VISIBLE_PAGES {
            for current in 0..total.max(1) {
                let window = page_window(current, total, MAX_VISIBLE_PAGES);
                let expected: Vec<PageSlot> = (0..total).map(P).collect();
                assert_eq!(window, expected, "total={total} current={current}");
                assert!(!window.contains(&Gap));
            }
        }
    }

    #[test]
    fn test_edge_totals() {
        assert!(page_window(0, 0, MAX_VISIBLE_PAGES).is_empty());
        assert_eq!(page_window(0, 1, MAX_VISIBLE_PAGES), vec![P(0)]);
    }

    #[test]
    fn test_middle_of_twelve() {
        assert_eq!(
            sentinels(&page_window(6, 12, MAX_VISIBLE_PAGES)),
            vec![0, -1, 4, 5, 6, 7, 8, -1, 11]
        );
    }

    #[test]
    fn test_first_page_has_no_leading_prefix() {
        assert_eq!(
            page_window(0, 12, MAX_VISIBLE_PAGES),
            vec![P(0), P(1), P(2), P(3), P(4), Gap, P(11)]
        );
    }

    #[test]
    fn test_near_start_prefix_without_gap() {
        // start == 1: first page is prefixed but nothing is skipped
        assert_eq!(
            page_window(3, 12, MAX_VISIBLE_PAGES),
            vec![P(0), P(1), P(2), P(3), P(4), P(5), Gap, P(11)]
        );
    }

    #[test]
    fn test_last_page_does_not_overflow() {
        assert_eq!(
            page_window(11, 12, MAX_VISIBLE_PAGES),
            vec![P(0), Gap, P(9), P(10), P(11)]
        );
        assert_eq!(
            page_window(8, 12, MAX_VISIBLE_PAGES),
            vec![P(0), Gap, P(6), P(7), P(8), P(9), P(10), P(11)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(
            page_window(40, 12, MAX_VISIBLE_PAGES),
            page_window(11, 12, MAX_VISIBLE_PAGES)
        );
    }

    #[test]
    fn test_window_is_deterministic() {
        let a = page_window(5, 30, MAX_VISIBLE_PAGES);
        let b = page_window(5, 30, MAX_VISIBLE_PAGES);
        assert_eq!(a, b);
    }

    #[test]
    fn test_page_deserializes_camel_case() {
        let page: Page<i64> = serde_json::from_str(
            r#"{"items":[1,2],"totalCount":12,"totalPages":2,"currentPage":0}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.total_pages, 2);
    }
}
