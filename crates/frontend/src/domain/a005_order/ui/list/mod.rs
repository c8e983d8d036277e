use contracts::domain::a005_order::aggregate::{CartItem, Order, PaymentStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::api_utils::image_url;
use crate::shared::components::crud_list::{row_number, CrudListStatus, CrudPagination};
use crate::shared::crud::CrudHandle;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub fn payment_color(status: &PaymentStatus) -> BadgeColor {
    match status {
        PaymentStatus::Paid => BadgeColor::Success,
        PaymentStatus::Pending => BadgeColor::Warning,
        PaymentStatus::Other(_) => BadgeColor::Danger,
    }
}

fn cart_item_view(item: &CartItem) -> impl IntoView {
    let qty = item.qty;
    match &item.product {
        Some(product) => {
            let thumb = product.image.as_deref().filter(|path| !path.is_empty()).map(|path| {
                view! { <img class="table__thumb table__thumb--small" src=image_url(path) alt=product.name.clone() /> }
            });
            view! {
                <div class="order-item" title=product.name.clone()>
                    {thumb}
                    <span class="order-item__qty">{format!("x{}", qty)}</span>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="order-item order-item--missing" title="Product no longer exists">
                <span class="order-item__qty">{format!("x{}", qty)}</span>
            </div>
        }
        .into_any(),
    }
}

/// Header row shared by the orders page and the dashboard.
#[component]
pub fn OrdersTableHeader() -> impl IntoView {
    view! {
        <TableHeader>
            <TableRow>
                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                <TableHeaderCell min_width=220.0>"Products"</TableHeaderCell>
                <TableHeaderCell min_width=110.0>"Payment"</TableHeaderCell>
                <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                <TableHeaderCell min_width=150.0>"Date"</TableHeaderCell>
            </TableRow>
        </TableHeader>
    }
}

pub fn order_row(number: usize, order: &Order) -> impl IntoView {
    let cart_items = order.cart_items.iter().map(cart_item_view).collect_view();
    let payment_color = payment_color(&order.payment_status);
    let payment_label = order.payment_status.label().to_string();
    let total = order.formatted_total();
    let created_at = format_datetime(order.created_at.as_ref());
    view! {
        <TableRow>
            <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
            <TableCell>
                <div class="order-items">
                    {cart_items}
                </div>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Badge appearance=BadgeAppearance::Tint color=payment_color>
                        {payment_label}
                    </Badge>
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>{created_at}</TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let handle = CrudHandle::new::<Order>();
    let state = handle.state;

    handle.refresh();

    let rows = move || {
        state.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, order)| order_row(row_number(s.current_page, s.page_size, index), order))
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="a005_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge>{move || state.with(|s| s.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle.refresh()
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <OrdersTableHeader />
                        <TableBody>{rows}</TableBody>
                    </Table>
                    <CrudListStatus handle=handle empty_text="No orders found" />
                </div>
                <CrudPagination handle=handle />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_colors() {
        assert!(matches!(payment_color(&PaymentStatus::Paid), BadgeColor::Success));
        assert!(matches!(payment_color(&PaymentStatus::Pending), BadgeColor::Warning));
        assert!(matches!(
            payment_color(&PaymentStatus::Other("Failed".into())),
            BadgeColor::Danger
        ));
    }
}
