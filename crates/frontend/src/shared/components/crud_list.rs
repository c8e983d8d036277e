//! Pieces every paginated list page renders around its table.

use contracts::domain::common::Identifiable;
use leptos::prelude::*;
use thaw::*;

use super::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::crud::CrudHandle;

/// Pagination bar wired to a list's state.
#[component]
pub fn CrudPagination<T>(handle: CrudHandle<T>) -> impl IntoView
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    let state = handle.state;
    view! {
        <PaginationControls
            current_page=Signal::derive(move || state.with(|s| s.selected().page))
            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
            summary=Signal::derive(move || state.with(|s| s.summary().to_string()))
            has_previous=Signal::derive(move || state.with(|s| s.has_previous()))
            has_next=Signal::derive(move || state.with(|s| s.has_next()))
            page_size=Signal::derive(move || state.with(|s| s.selected().limit))
            on_page_change=Callback::new(move |page| handle.set_page(page))
            on_page_size_change=Callback::new(move |size| handle.set_page_size(size))
            page_size_options=config().list.page_size_options.clone()
        />
    }
}

/// Spinner during the first load, a message when the list is empty.
#[component]
pub fn CrudListStatus<T>(handle: CrudHandle<T>, empty_text: &'static str) -> impl IntoView
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    let state = handle.state;
    move || {
        state.with(|s| {
            if s.is_loading && !s.is_loaded {
                view! {
                    <div class="list-status">
                        <Spinner label="Loading..." />
                    </div>
                }
                .into_any()
            } else if s.is_loaded && s.items.is_empty() {
                view! { <div class="list-status list-status--empty">{empty_text}</div> }.into_any()
            } else {
                ().into_any()
            }
        })
    }
}

/// Ordinal of the `index`-th row of the shown page
pub fn row_number(current_page: usize, page_size: usize, index: usize) -> usize {
    (current_page.max(1) - 1) * page_size + index + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_number() {
        assert_eq!(row_number(1, 10, 0), 1);
        assert_eq!(row_number(3, 5, 4), 15);
    }
}
