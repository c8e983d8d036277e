//! Page arithmetic shared by every paginated list.
//!
//! Pages are 1-based on the wire (`?page=1&limit=10`) and everywhere in the UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 30, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of one resource, as requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Returns `None` when either value is zero.
    pub fn new(page: usize, limit: usize) -> Option<Self> {
        if page == 0 || limit == 0 {
            return None;
        }
        Some(Self { page, limit })
    }

    pub fn first(limit: usize) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn query_string(&self) -> String {
        format!("page={}&limit={}", self.page, self.limit)
    }
}

/// One page of items plus the server's totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
}

/// `ceil(total_items / page_size)`, zero for an empty list.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 || page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Highest page a list may navigate to. An empty list still has page 1.
pub fn last_page(total_pages: usize) -> usize {
    total_pages.max(1)
}

/// "Showing X–Y of Z" numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl RangeSummary {
    pub fn new(current_page: usize, limit: usize, total: usize) -> Self {
        if total == 0 || current_page == 0 || limit == 0 {
            return Self {
                start: 0,
                end: 0,
                total,
            };
        }
        let start = (current_page - 1) * limit + 1;
        let end = (current_page * limit).min(total);
        Self { start, end, total }
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}–{} of {}", self.start, self.end, self.total)
    }
}

/// Entry of the numbered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Pages shown between "previous" and "next".
///
/// Short lists show every page. Longer ones keep the first and last page
/// plus a window around the current page, with ellipses for the gaps.
pub fn page_links(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    const WINDOW: usize = 1;
    const SHOW_ALL_UP_TO: usize = 7;

    let total = last_page(total_pages);
    if total <= SHOW_ALL_UP_TO {
        return (1..=total).map(PageLink::Page).collect();
    }

    let current = current_page.clamp(1, total);
    let from = current.saturating_sub(WINDOW).max(2);
    let to = (current + WINDOW).min(total - 1);

    let mut links = vec![PageLink::Page(1)];
    if from > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((from..=to).map(PageLink::Page));
    if to < total - 1 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(13, 5), 3);
        assert_eq!(total_pages(15, 5), 3);
        assert_eq!(total_pages(16, 5), 4);
        assert_eq!(total_pages(1, 100), 1);
        for size in 1..=12 {
            for total in 0..=60 {
                let pages = total_pages(total, size);
                assert!(pages * size >= total);
                if total > 0 {
                    assert!((pages - 1) * size < total);
                }
            }
        }
    }

    #[test]
    fn test_page_request() {
        assert!(PageRequest::new(0, 10).is_none());
        assert!(PageRequest::new(1, 0).is_none());
        let req = PageRequest::new(2, 5).unwrap();
        assert_eq!(req.query_string(), "page=2&limit=5");
        assert_eq!(PageRequest::first(0).limit, 1);
    }

    #[test]
    fn test_range_summary() {
        assert_eq!(RangeSummary::new(1, 5, 13).to_string(), "Showing 1–5 of 13");
        assert_eq!(RangeSummary::new(3, 5, 13).to_string(), "Showing 11–13 of 13");
        assert_eq!(RangeSummary::new(1, 10, 0).to_string(), "Showing 0–0 of 0");
    }

    #[test]
    fn test_page_links_short() {
        assert_eq!(page_links(1, 0), vec![Page(1)]);
        assert_eq!(page_links(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_page_links_long() {
        assert_eq!(
            page_links(1, 20),
            vec![Page(1), Page(2), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_links(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_links(20, 20),
            vec![Page(1), Ellipsis, Page(19), Page(20)]
        );
        assert_eq!(
            page_links(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }
}
