use contracts::shared::forms::{FieldErrors, Validate};
use contracts::system::auth::ForgotPasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::components::form_field::FormField;
use crate::shared::crud::notify::Notifier;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_AUTH;
use crate::system::auth::api;

const OTP_SENT: &str = "OTP sent. Please check your email.";
const OTP_FAILED: &str = "Failed to send OTP. Try again.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let is_loading = RwSignal::new(false);
    let notifier = use_notifications();
    let navigate = StoredValue::new_local(use_navigate());

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let request = ForgotPasswordRequest {
            email: email.get_untracked().trim().to_string(),
        };
        let invalid = request.validate();
        errors.set(invalid.clone());
        if !invalid.is_valid() {
            return;
        }

        is_loading.set(true);
        spawn_local(async move {
            match api::forgot_password(&request).await {
                Ok(_) => {
                    notifier.success(OTP_SENT.to_string());
                    navigate.with_value(|go| go("/signin", Default::default()));
                }
                Err(e) => {
                    log::warn!("password recovery failed: {}", e);
                    notifier.error(e.user_message(OTP_FAILED));
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    let email_error = Signal::derive(move || errors.with(|e| e.get("email").map(str::to_string)));

    view! {
        <PageFrame page_id="sys_forgot_password--auth" category=PAGE_CAT_AUTH>
            <div class="auth-box">
                <A href="/signin" attr:class="auth-box__back">
                    {icon("chevron-left")}
                    "Back to sign in"
                </A>
                <h1 class="auth-box__title">"Forgot Password"</h1>
                <p class="auth-box__subtitle">
                    "Enter your registered email address to receive a verification code."
                </p>

                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormField label="Email" error=email_error required=true>
                        <Input value=email input_type=InputType::Email placeholder="info@gmail.com" />
                    </FormField>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=Signal::derive(move || is_loading.get())
                        attr:style="width: 100%;"
                    >
                        {move || if is_loading.get() { "Sending OTP..." } else { "Send OTP" }}
                    </Button>
                </form>

                <p class="auth-box__footer">
                    "Remember your password? "
                    <A href="/signin">"Sign In"</A>
                </p>
            </div>
        </PageFrame>
    }
}
