use leptos::prelude::*;

/// Native select bound to a string value, with a placeholder entry that
/// maps to the empty string.
#[component]
pub fn Select(
    /// Current value
    value: RwSignal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty entry
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select an option".to_string());

    view! {
        <select
            id=select_id
            class="form__select"
            disabled=disabled
            on:change=move |ev| value.set(event_target_value(&ev))
            prop:value=move || value.get()
        >
            <option value="" selected=move || value.get().is_empty()>
                {placeholder_text}
            </option>
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
