use leptos::prelude::*;

/// Label, control and the field's validation message.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// Message shown under the control; nothing when `None`
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {children()}
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
