use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders `children` only for a signed-in user, otherwise sends the
/// browser to the sign-in page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/signin" /> }
        >
            {children()}
        </Show>
    }
}

/// Sign-in and recovery pages: a signed-in user goes straight to the
/// dashboard.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
