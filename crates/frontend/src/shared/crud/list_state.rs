//! State of one paginated list and the rules for moving between pages.
//!
//! Every fetch is issued as a [`FetchTicket`] carrying a sequence number.
//! Only the response to the most recently issued ticket may change the
//! state; anything older is reported as [`Applied::Stale`] and dropped.
//! The shown page changes only when its data has actually arrived, so a
//! failed fetch leaves the previous page on screen unchanged. Navigation is
//! checked against the newest selection, which may still be in flight.

use contracts::domain::common::Identifiable;
use contracts::shared::pagination::{last_page, total_pages, PageRequest, PageResult, RangeSummary};

use super::client::ApiError;

/// A fetch in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: PageRequest,
}

/// Outcome of feeding a response back into the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Updated,
    /// A newer fetch was issued after this one
    Stale,
    /// State untouched; the caller reports the error
    Failed(ApiError),
    /// The requested page no longer exists; fetch this one instead
    Reposition(FetchTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState<T> {
    pub current_page: usize,
    pub page_size: usize,
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub is_loading: bool,
    /// At least one page has been applied
    pub is_loaded: bool,
    last_issued: u64,
    /// Newest page the user asked for; equals the shown page once it lands
    selected: PageRequest,
}

impl<T> ListViewState<T> {
    pub fn new(page_size: usize) -> Self {
        let selected = PageRequest::first(page_size);
        Self {
            current_page: selected.page,
            page_size: selected.limit,
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            is_loading: false,
            is_loaded: false,
            last_issued: 0,
            selected,
        }
    }

    fn issue(&mut self, request: PageRequest) -> FetchTicket {
        self.last_issued += 1;
        self.is_loading = true;
        self.selected = request;
        FetchTicket {
            seq: self.last_issued,
            request,
        }
    }

    fn shown(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            limit: self.page_size,
        }
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.last_issued
    }

    /// The page and size of the newest fetch, pending or shown.
    pub fn selected(&self) -> PageRequest {
        self.selected
    }

    /// Last page reachable at the selected page size.
    fn selected_last_page(&self) -> usize {
        if self.selected.limit == self.page_size {
            last_page(self.total_pages)
        } else {
            last_page(total_pages(self.total_items, self.selected.limit))
        }
    }

    /// Re-fetch the selected page.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue(self.selected)
    }

    /// `None` when `page` is out of range or already selected.
    pub fn set_page(&mut self, page: usize) -> Option<FetchTicket> {
        if page < 1 || page > self.selected_last_page() || page == self.selected.page {
            return None;
        }
        let request = PageRequest::new(page, self.selected.limit)?;
        Some(self.issue(request))
    }

    /// Changing the page size always starts over at page 1.
    pub fn set_page_size(&mut self, size: usize) -> Option<FetchTicket> {
        let request = PageRequest::new(1, size)?;
        Some(self.issue(request))
    }

    pub fn summary(&self) -> RangeSummary {
        RangeSummary::new(self.current_page, self.page_size, self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.selected.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.selected.page < self.selected_last_page()
    }

    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResult<T>, ApiError>,
    ) -> Applied {
        if !self.is_latest(&ticket) {
            return Applied::Stale;
        }
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.is_loading = false;
                self.selected = self.shown();
                return Applied::Failed(e);
            }
        };

        let last = last_page(page.total_pages);
        if page.items.is_empty() && ticket.request.page > last {
            self.total_items = page.total_items;
            self.total_pages = page.total_pages;
            let retry = self.issue(PageRequest {
                page: last,
                limit: ticket.request.limit,
            });
            return Applied::Reposition(retry);
        }

        self.current_page = ticket.request.page;
        self.page_size = ticket.request.limit;
        self.items = page.items;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
        self.is_loading = false;
        self.is_loaded = true;
        Applied::Updated
    }
}

impl<T: Identifiable> ListViewState<T> {
    /// Re-fetch after `deleted_id` was removed on the server, stepping back a
    /// page when it was the only item left on a page past the first.
    pub fn refresh_after_delete(&mut self, deleted_id: &str) -> FetchTicket {
        let remaining = self
            .items
            .iter()
            .filter(|item| item.id() != deleted_id)
            .count();
        let page = if remaining == 0 && self.current_page > 1 {
            self.current_page - 1
        } else {
            self.current_page
        };
        self.issue(PageRequest {
            page,
            limit: self.page_size,
        })
    }
}
