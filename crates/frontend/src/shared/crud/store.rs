use std::cell::RefCell;

use leptos::prelude::*;

use super::list_state::ListViewState;

/// Where a controller keeps its [`ListViewState`].
///
/// Pages keep it in a signal; tests keep it in a `RefCell`.
pub trait ListStore<T> {
    /// `None` once the store is gone (the page was unmounted).
    fn update_list<R>(&self, f: impl FnOnce(&mut ListViewState<T>) -> R) -> Option<R>;
}

impl<T> ListStore<T> for RefCell<ListViewState<T>> {
    fn update_list<R>(&self, f: impl FnOnce(&mut ListViewState<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> ListStore<T> for RwSignal<ListViewState<T>> {
    fn update_list<R>(&self, f: impl FnOnce(&mut ListViewState<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}
