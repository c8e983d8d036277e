use contracts::domain::common::Identifiable;

use super::client::{ResourceClient, FALLBACK_MESSAGE};
use super::list_state::{Applied, FetchTicket, ListViewState};
use super::notify::Notifier;
use super::store::ListStore;

/// Drives the fetches of one paginated list.
///
/// Page moves are decided by [`ListViewState`]; the controller performs the
/// resulting fetch, feeds the response back and reports failures once.
pub struct ListController<'a, T, S, N> {
    client: &'a dyn ResourceClient<T>,
    store: &'a S,
    notifier: &'a N,
}

impl<'a, T, S, N> ListController<'a, T, S, N>
where
    T: Identifiable,
    S: ListStore<T>,
    N: Notifier,
{
    pub fn new(client: &'a dyn ResourceClient<T>, store: &'a S, notifier: &'a N) -> Self {
        Self {
            client,
            store,
            notifier,
        }
    }

    pub fn client(&self) -> &'a dyn ResourceClient<T> {
        self.client
    }

    pub fn notifier(&self) -> &'a N {
        self.notifier
    }

    /// Fetch the current page.
    pub async fn refresh(&self) {
        let ticket = self.store.update_list(ListViewState::refresh);
        self.run(ticket).await;
    }

    /// Returns `false` when `page` was rejected and nothing was fetched.
    pub async fn set_page(&self, page: usize) -> bool {
        let ticket = self.store.update_list(|s| s.set_page(page)).flatten();
        let accepted = ticket.is_some();
        self.run(ticket).await;
        accepted
    }

    pub async fn set_page_size(&self, size: usize) -> bool {
        let ticket = self.store.update_list(|s| s.set_page_size(size)).flatten();
        let accepted = ticket.is_some();
        self.run(ticket).await;
        accepted
    }

    pub async fn refresh_after_delete(&self, deleted_id: &str) {
        let ticket = self
            .store
            .update_list(|s| s.refresh_after_delete(deleted_id));
        self.run(ticket).await;
    }

    async fn run(&self, ticket: Option<FetchTicket>) {
        let mut next = ticket;
        while let Some(ticket) = next.take() {
            let result = self.client.list(ticket.request).await;
            match self.store.update_list(|s| s.apply(ticket, result)) {
                None => log::debug!("list closed before page {} arrived", ticket.request.page),
                Some(Applied::Updated) => {}
                Some(Applied::Stale) => {
                    log::debug!("dropping stale response #{} for page {}", ticket.seq, ticket.request.page)
                }
                Some(Applied::Failed(e)) => {
                    log::warn!("failed to load page {}: {}", ticket.request.page, e);
                    self.notifier.request_failed(&e, FALLBACK_MESSAGE);
                }
                Some(Applied::Reposition(retry)) => {
                    log::debug!(
                        "page {} no longer exists, loading page {}",
                        ticket.request.page,
                        retry.request.page
                    );
                    next = Some(retry);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::notify::{NoticeLevel, SESSION_EXPIRED_MESSAGE};
    use crate::shared::crud::testing::{row_ids, InMemoryClient, RecordingNotifier, Row};
    use contracts::shared::pagination::PageRequest;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_load_first_page() {
        let client = InMemoryClient::with_rows(13);
        let store = RefCell::new(ListViewState::<Row>::new(5));
        let notifier = RecordingNotifier::default();
        let list = ListController::new(&client, &store, &notifier);

        block_on(list.refresh());

        let state = store.borrow();
        assert_eq!(row_ids(&state.items), ["r1", "r2", "r3", "r4", "r5"]);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.summary().to_string(), "Showing 1–5 of 13");
        assert_eq!(client.list_calls(), vec![PageRequest { page: 1, limit: 5 }]);
    }

    #[test]
    fn test_set_page_fetches_exactly_once() {
        let client = InMemoryClient::with_rows(13);
        let store = RefCell::new(ListViewState::<Row>::new(5));
        let notifier = RecordingNotifier::default();
        let list = ListController::new(&client, &store, &notifier);
        block_on(list.refresh());

        assert!(block_on(list.set_page(3)));
        assert!(!block_on(list.set_page(3)));
        assert!(!block_on(list.set_page(9)));

        assert_eq!(client.list_calls().len(), 2);
        assert_eq!(row_ids(&store.borrow().items), ["r11", "r12", "r13"]);
    }

    #[test]
    fn test_set_page_size_goes_to_first_page() {
        let client = InMemoryClient::with_rows(45);
        let store = RefCell::new(ListViewState::<Row>::new(10));
        let notifier = RecordingNotifier::default();
        let list = ListController::new(&client, &store, &notifier);
        block_on(list.refresh());
        block_on(list.set_page(3));

        assert!(block_on(list.set_page_size(5)));
        assert!(!block_on(list.set_page_size(0)));

        let state = store.borrow();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, 5);
        assert_eq!(state.total_pages, 9);
    }

    #[test]
    fn test_failed_fetch_notifies_once_and_keeps_page() {
        let client = InMemoryClient::with_rows(13);
        let store = RefCell::new(ListViewState::<Row>::new(5));
        let notifier = RecordingNotifier::default();
        let list = ListController::new(&client, &store, &notifier);
        block_on(list.refresh());

        client.fail_lists_with(Some("Database unavailable"));
        assert!(block_on(list.set_page(2)));

        assert_eq!(notifier.errors(), vec!["Database unavailable".to_string()]);
        let state = store.borrow();
        assert_eq!(state.current_page, 1);
        assert_eq!(row_ids(&state.items), ["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let client = InMemoryClient::with_rows(3);
        let store = RefCell::new(ListViewState::<Row>::new(5));
        let notifier = RecordingNotifier::default();
        client.fail_lists_with(None);

        block_on(ListController::new(&client, &store, &notifier).refresh());

        assert_eq!(notifier.errors(), vec!["Something went wrong".to_string()]);
        assert!(!store.borrow().is_loaded);
    }

    #[test]
    fn test_rejected_token_ends_session() {
        let client = InMemoryClient::with_rows(13);
        let store = RefCell::new(ListViewState::<Row>::new(5));
        let notifier = RecordingNotifier::default();
        let list = ListController::new(&client, &store, &notifier);
        block_on(list.refresh());

        client.expire_session();
        block_on(list.set_page(2));

        assert!(notifier.errors().is_empty());
        assert_eq!(
            notifier.messages(),
            vec![(NoticeLevel::Info, SESSION_EXPIRED_MESSAGE.to_string())]
        );
        assert_eq!(store.borrow().current_page, 1);
    }

    #[test]
    fn test_refresh_repositions_after_outside_deletes() {
        let client = InMemoryClient::with_rows(13);
        let store = RefCell::new(ListViewState::<Row>::new(5));
        let notifier = RecordingNotifier::default();
        let list = ListController::new(&client, &store, &notifier);
        block_on(list.refresh());
        block_on(list.set_page(3));

        client.remove_rows(&["r11", "r12", "r13"]);
        block_on(list.refresh());

        let state = store.borrow();
        assert_eq!(state.current_page, 2);
        assert_eq!(row_ids(&state.items), ["r6", "r7", "r8", "r9", "r10"]);
        assert!(notifier.is_empty());
    }
}
