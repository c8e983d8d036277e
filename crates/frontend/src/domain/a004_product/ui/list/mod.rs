use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_language::aggregate::Language;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a004_product::form::ProductForm;
use leptos::prelude::*;
use thaw::*;

use super::details::{initial_form, ProductDetails};
use crate::domain::a004_product::format_price;
use crate::domain::common::options::{load_options, option_label};
use crate::shared::api_utils::image_url;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::crud_list::{row_number, CrudListStatus, CrudPagination};
use crate::shared::crud::CrudHandle;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn ProductList() -> impl IntoView {
    let handle = CrudHandle::new::<Product>();
    let state = handle.state;
    let categories = RwSignal::new(Vec::<(String, String)>::new());
    let languages = RwSignal::new(Vec::<(String, String)>::new());
    let editing = RwSignal::new(None::<ProductForm>);
    let deleting = RwSignal::new(None::<Product>);

    handle.refresh();
    load_options::<Category>(categories, |c| c.name.clone());
    load_options::<Language>(languages, |l| l.name.clone());

    let confirm_delete = move || {
        if let Some(product) = deleting.get_untracked() {
            handle.delete(product.id.clone(), move || deleting.set(None));
        }
    };

    let rows = move || {
        let categories = categories.get();
        state.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, product)| {
                    let number = row_number(s.current_page, s.page_size, index);
                    let for_edit = product.clone();
                    let for_delete = product.clone();
                    let category = option_label(&categories, &product.category_id);
                    let thumb = (!product.image.is_empty()).then(|| (image_url(&product.image), product.name.clone()));
                    let name = product.name.clone();
                    let price = format_price(product.price);
                    let discounted_price = format_price(product.discounted_price);
                    let is_featured = product.is_featured;
                    let is_best_seller = product.is_best_seller;
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    {thumb.map(|(src, alt)| view! {
                                        <img class="table__thumb" src=src alt=alt />
                                    })}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{name}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{discounted_price}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout truncate=true>{category}</TableCellLayout></TableCell>
                            <TableCell>
                                <Flex gap=FlexGap::Small>
                                    {is_featured.then(|| view! {
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Featured"</Badge>
                                    })}
                                    {is_best_seller.then(|| view! {
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Best seller"</Badge>
                                    })}
                                </Flex>
                            </TableCell>
                            <TableCell>
                                <Flex gap=FlexGap::Small>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| editing.set(Some(initial_form(Some(&for_edit))))
                                    >
                                        {icon("edit")}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| deleting.set(Some(for_delete.clone()))
                                    >
                                        {icon("delete")}
                                    </Button>
                                </Flex>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || state.with(|s| s.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(initial_form(None)))
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
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
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Discounted"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Flags"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                    <CrudListStatus handle=handle empty_text="No products found" />
                </div>
                <CrudPagination handle=handle />
            </div>

            {move || editing.get().map(|initial| view! {
                <ProductDetails
                    handle=handle
                    initial=initial
                    categories=categories
                    languages=languages
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}

            {move || deleting.get().map(|product| view! {
                <ConfirmDialog
                    title="Delete Product"
                    message=format!("Are you sure you want to delete \"{}\"?", product.name)
                    busy=handle.busy
                    on_confirm=Callback::new(move |_| confirm_delete())
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
