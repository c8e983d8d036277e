use contracts::domain::common::ImageSelection;
use leptos::prelude::*;
use web_sys::{HtmlInputElement, Url};

use crate::shared::api_utils::image_url;
use crate::shared::icons::icon;

/// File chosen in an [`ImagePicker`], kept out of the form so that the form
/// stays plain data.
pub type PickedFile = RwSignal<Option<web_sys::File>, LocalStorage>;

pub fn picked_file() -> PickedFile {
    RwSignal::new_local(None)
}

/// Image input with preview and removal.
#[component]
pub fn ImagePicker(
    selection: RwSignal<ImageSelection>,
    file: PickedFile,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let object_url = RwSignal::new(None::<String>);

    let revoke = move || {
        if let Some(url) = object_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
            object_url.set(None);
        }
    };
    on_cleanup(move || {
        if let Some(url) = object_url.try_get_untracked().flatten() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(picked) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        revoke();
        match Url::create_object_url_with_blob(&picked) {
            Ok(url) => object_url.set(Some(url)),
            Err(e) => log::warn!("cannot preview {}: {:?}", picked.name(), e),
        }
        selection.set(ImageSelection::Picked(picked.name()));
        file.set(Some(picked));
        input.set_value("");
    };

    let on_remove = move |_| {
        revoke();
        file.set(None);
        selection.set(ImageSelection::Empty);
    };

    let preview = move || match selection.get() {
        ImageSelection::Existing(path) => Some(image_url(&path)),
        ImageSelection::Picked(_) => object_url.get(),
        ImageSelection::Empty => None,
    };

    view! {
        <div class="image-picker">
            {move || match preview() {
                Some(src) => view! {
                    <div class="image-picker__preview">
                        <img src=src alt="Preview" />
                        <button
                            class="button button--icon image-picker__remove"
                            title="Remove image"
                            on:click=on_remove
                            disabled=move || disabled.get()
                        >
                            {icon("x")}
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <input
                        class="image-picker__input"
                        type="file"
                        accept="image/*"
                        on:change=on_change
                        disabled=move || disabled.get()
                    />
                }.into_any(),
            }}
        </div>
    }
}
