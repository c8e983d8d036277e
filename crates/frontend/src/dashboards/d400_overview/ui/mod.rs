//! Home page: order and user counts for a chosen period, and the newest
//! orders.

use contracts::dashboards::d400_overview::{OverviewStats, StatsPeriod, RECENT_ORDERS_LIMIT};
use contracts::domain::a005_order::aggregate::Order;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_overview::{api, StatsRequests};
use crate::domain::a005_order::ui::list::{order_row, OrdersTableHeader};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::select::Select;
use crate::shared::crud::client::FALLBACK_MESSAGE;
use crate::shared::crud::notify::Notifier;
use crate::shared::crud::{HttpResourceClient, ResourceClient};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

fn period_options() -> Vec<(String, String)> {
    StatsPeriod::ALL
        .iter()
        .map(|p| (p.query_value().to_string(), p.label().to_string()))
        .collect()
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let notifier = use_notifications();

    let period = RwSignal::new(StatsPeriod::default().query_value().to_string());
    let stats = RwSignal::new(None::<OverviewStats>);
    let requests = StoredValue::new(StatsRequests::default());
    let recent = RwSignal::new(Vec::<Order>::new());
    let recent_loading = RwSignal::new(true);

    // Reload the counters whenever the period changes.
    Effect::new(move |_| {
        let selected = StatsPeriod::from_query_value(&period.get()).unwrap_or_default();
        let credential = auth_state.get_untracked().credential();
        requests.update_value(|r| {
            r.issue();
        });
        let seq = requests.with_value(StatsRequests::latest);
        stats.set(None);
        spawn_local(async move {
            let result = api::fetch_stats(selected, &credential).await;
            if !requests.try_with_value(|r| r.is_latest(seq)).unwrap_or(false) {
                log::debug!("dropping stale stats #{} for {}", seq, selected.label());
                return;
            }
            match result {
                Ok(loaded) => {
                    let _ = stats.try_set(Some(loaded));
                }
                Err(e) => {
                    log::error!("Failed to load stats for {}: {}", selected.label(), e);
                    notifier.request_failed(&e, FALLBACK_MESSAGE);
                }
            }
        });
    });

    {
        let client = HttpResourceClient::<Order>::from_config(auth_state.get_untracked().credential());
        spawn_local(async move {
            match client.list(PageRequest::first(RECENT_ORDERS_LIMIT)).await {
                Ok(page) => {
                    let _ = recent.try_set(page.items);
                }
                Err(e) => {
                    log::error!("Failed to load recent orders: {}", e);
                    notifier.request_failed(&e, FALLBACK_MESSAGE);
                }
            }
            let _ = recent_loading.try_set(false);
        });
    }

    let rows = move || {
        recent.with(|orders| {
            orders
                .iter()
                .enumerate()
                .map(|(index, order)| order_row(index + 1, order))
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Select value=period options=Signal::derive(period_options) id="overview-period" />
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=Signal::derive(move || stats.get().map(|s| s.total_orders))
                    />
                    <StatCard
                        label="Total Users"
                        icon_name="users"
                        value=Signal::derive(move || stats.get().map(|s| s.total_users))
                    />
                </div>

                <div class="card">
                    <h2 class="card__title">"Recent Orders"</h2>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <OrdersTableHeader />
                            <TableBody>{rows}</TableBody>
                        </Table>
                        <Show when=move || recent_loading.get()>
                            <div class="list-status"><Spinner label="Loading..." /></div>
                        </Show>
                        <Show when=move || !recent_loading.get() && recent.with(Vec::is_empty)>
                            <div class="list-status list-status--empty">"No orders yet"</div>
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_options_cover_every_period() {
        let options = period_options();
        assert_eq!(options.len(), StatsPeriod::ALL.len());
        assert_eq!(options[0], ("today".to_string(), "Today".to_string()));
        assert_eq!(options[4], ("till Now".to_string(), "Till Now".to_string()));
    }
}
