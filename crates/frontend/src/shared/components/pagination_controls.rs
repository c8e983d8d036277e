use contracts::shared::pagination::{page_links, PageLink};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// PaginationControls component - page links, previous/next and page size
///
/// Pages are 1-based. `current_page` is the newest selection, which may still
/// be loading; previous/next step from it. The buttons only propose a page;
/// the list controller decides whether it is in range.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, 0 for an empty list
    #[prop(into)]
    total_pages: Signal<usize>,

    /// "Showing X–Y of Z" for the rows on screen
    #[prop(into)]
    summary: Signal<String>,

    /// Whether a page before `current_page` exists
    #[prop(into)]
    has_previous: Signal<bool>,

    /// Whether a page after `current_page` exists
    #[prop(into)]
    has_next: Signal<bool>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes; hides the selector when absent
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    /// Available page size options
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_default();

    let at_first = move || !has_previous.get();
    let at_last = move || !has_next.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{summary}</span>
            <div class="pagination-pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1))
                    disabled=at_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_links(current, total_pages.get())
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(page) => {
                                let class = if page == current {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_page_change.run(page)>
                                        {page.to_string()}
                                    </button>
                                }
                                .into_any()
                            }
                            PageLink::Ellipsis => {
                                view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
                    disabled=at_last
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
            {on_page_size_change.map(|on_change| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}
