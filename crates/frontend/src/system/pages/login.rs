use contracts::shared::forms::{FieldErrors, Validate};
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::components::form_field::FormField;
use crate::shared::crud::notify::Notifier;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_AUTH;
use crate::system::auth::api;
use crate::system::auth::context::{sign_in, use_auth};

const LOGIN_FAILED: &str = "Login failed. Check your email and password.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let notifier = use_notifications();
    let navigate = StoredValue::new_local(use_navigate());

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let invalid = request.validate();
        errors.set(invalid.clone());
        if !invalid.is_valid() {
            return;
        }

        is_loading.set(true);
        spawn_local(async move {
            match api::login(&request).await {
                Ok(token) => {
                    sign_in(set_auth_state, token);
                    notifier.success("Signed in successfully".to_string());
                    navigate.with_value(|go| go("/", Default::default()));
                }
                Err(e) => {
                    log::warn!("sign-in rejected: {}", e);
                    notifier.error(e.user_message(LOGIN_FAILED));
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    let error_of = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    view! {
        <PageFrame page_id="sys_signin--auth" category=PAGE_CAT_AUTH>
            <div class="auth-box">
                <h1 class="auth-box__title">"Sign In"</h1>
                <p class="auth-box__subtitle">"Enter your email and password to sign in."</p>

                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormField label="Email" error=error_of("email") required=true>
                        <Input value=email input_type=InputType::Email placeholder="info@gmail.com" />
                    </FormField>
                    <FormField label="Password" error=error_of("password") required=true>
                        <Input value=password input_type=InputType::Password placeholder="Enter your password" />
                    </FormField>
                    <div class="auth-box__links">
                        <A href="/forgot-password">"Forgot password?"</A>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=Signal::derive(move || is_loading.get())
                        attr:style="width: 100%;"
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>
            </div>
        </PageFrame>
    }
}
