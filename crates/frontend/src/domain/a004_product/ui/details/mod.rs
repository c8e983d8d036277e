//! Add / edit dialog of a product.

use std::sync::Arc;

use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a004_product::form::ProductForm;
use contracts::shared::forms::{FieldErrors, FormMode};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_product::ProductDraft;
use crate::shared::components::form_field::FormField;
use crate::shared::components::image_picker::{picked_file, ImagePicker};
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::select::Select;
use crate::shared::crud::CrudHandle;

#[component]
pub fn ProductDetails(
    handle: CrudHandle<Product>,
    /// Starting values; `mode` tells create from edit
    initial: ProductForm,
    #[prop(into)] categories: Signal<Vec<(String, String)>>,
    #[prop(into)] languages: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let mode: FormMode = initial.mode.clone();
    let title = if mode.is_edit() {
        "Edit Product"
    } else {
        "Add Product"
    };

    let name = RwSignal::new(initial.name);
    let price = RwSignal::new(initial.price);
    let discounted_price = RwSignal::new(initial.discounted_price);
    let category_id = RwSignal::new(initial.category_id);
    let language_id = RwSignal::new(initial.language_id);
    let is_featured = RwSignal::new(initial.is_featured);
    let is_best_seller = RwSignal::new(initial.is_best_seller);
    let image = RwSignal::new(initial.image);
    let file = picked_file();
    let errors = RwSignal::new(FieldErrors::new());
    let mode = StoredValue::new(mode);

    let error_of = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move || {
        let form = ProductForm {
            mode: mode.get_value(),
            name: name.get_untracked(),
            price: price.get_untracked(),
            discounted_price: discounted_price.get_untracked(),
            category_id: category_id.get_untracked(),
            language_id: language_id.get_untracked(),
            is_featured: is_featured.get_untracked(),
            is_best_seller: is_best_seller.get_untracked(),
            image: image.get_untracked(),
        };
        let draft = ProductDraft {
            form,
            file: file.get_untracked(),
        };
        handle.save(
            draft,
            move || on_close.run(()),
            move |invalid| errors.set(invalid),
        );
    };

    let busy = handle.busy;
    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || busy.get())
                >
                    {move || if busy.get() { "Saving..." } else { "Save Product" }}
                </Button>
            </Flex>
        }
        .into_any()
    });

    view! {
        <Modal title=title.to_string() on_close=on_close footer=footer>
            <form class="form form--grid" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <FormField label="Name" error=error_of("name") required=true>
                    <Input value=name placeholder="Product name" />
                </FormField>
                <FormField label="Price" error=error_of("price") required=true>
                    <Input value=price placeholder="0.00" />
                </FormField>
                <FormField label="Discounted price" error=error_of("discountedPrice") required=true>
                    <Input value=discounted_price placeholder="0.00" />
                </FormField>
                <FormField label="Category" error=error_of("categoryId") required=true>
                    <Select value=category_id options=categories placeholder="Select category" />
                </FormField>
                <FormField label="Language" error=error_of("languageId") required=true>
                    <Select value=language_id options=languages placeholder="Select language" />
                </FormField>
                <div class="form__group form__group--inline">
                    <Checkbox checked=is_featured label="Featured" />
                    <Checkbox checked=is_best_seller label="Best seller" />
                </div>
                <FormField label="Image" error=error_of("image") required=!mode.with_value(FormMode::is_edit)>
                    <ImagePicker selection=image file=file disabled=busy />
                </FormField>
            </form>
        </Modal>
    }
}

/// Form state for a product row, or an empty one for "Add Product".
pub fn initial_form(product: Option<&Product>) -> ProductForm {
    match product {
        Some(product) => ProductForm::edit(product),
        None => ProductForm::default(),
    }
}
