use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::modal::Modal;

/// Yes/no question before a destructive action. Stays open until the
/// caller closes it, so a failed action can be retried.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    /// Disables both buttons while the action runs
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {move || if busy.get() { "Deleting..." } else { "Delete" }}
                </Button>
            </Flex>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <p class="confirm-dialog__message">{message}</p>
        </Modal>
    }
}
