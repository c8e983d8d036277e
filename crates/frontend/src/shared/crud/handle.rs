//! Binds a [`ListController`] to a page: state in a signal, client in a
//! local stored value, fetches on `spawn_local`.

use std::rc::Rc;

use contracts::domain::common::{Identifiable, Resource};
use contracts::shared::forms::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::{HttpResourceClient, ResourceClient};
use super::controller::ListController;
use super::coordinator::{MutationCoordinator, MutationForm, SaveOutcome};
use super::list_state::ListViewState;
use crate::shared::config::config;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::system::auth::context::use_auth;

pub struct CrudHandle<T: 'static> {
    pub state: RwSignal<ListViewState<T>>,
    /// A create, update or delete is in flight
    pub busy: RwSignal<bool>,
    client: StoredValue<Rc<dyn ResourceClient<T>>, LocalStorage>,
    notifier: NotificationService,
    singular: &'static str,
}

impl<T: 'static> Clone for CrudHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CrudHandle<T> {}

impl<T> CrudHandle<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    /// List of `R` against the configured API, signed with the current token.
    pub fn new<R: Resource<Item = T>>() -> Self {
        let (auth_state, _) = use_auth();
        let credential = auth_state.get_untracked().credential();
        let client: Rc<dyn ResourceClient<T>> =
            Rc::new(HttpResourceClient::<R>::from_config(credential));
        Self::with_client(client, R::SINGULAR, config().list.default_page_size)
    }

    pub fn with_client(
        client: Rc<dyn ResourceClient<T>>,
        singular: &'static str,
        page_size: usize,
    ) -> Self {
        Self {
            state: RwSignal::new(ListViewState::new(page_size)),
            busy: RwSignal::new(false),
            client: StoredValue::new_local(client),
            notifier: use_notifications(),
            singular,
        }
    }

    pub fn client(&self) -> Rc<dyn ResourceClient<T>> {
        self.client.get_value()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn refresh(&self) {
        let this = *self;
        let client = self.client();
        spawn_local(async move {
            ListController::new(&*client, &this.state, &this.notifier)
                .refresh()
                .await;
        });
    }

    pub fn set_page(&self, page: usize) {
        let this = *self;
        let client = self.client();
        spawn_local(async move {
            let list = ListController::new(&*client, &this.state, &this.notifier);
            if list.set_page(page).await {
                scroll_to_top();
            }
        });
    }

    pub fn set_page_size(&self, size: usize) {
        let this = *self;
        let client = self.client();
        spawn_local(async move {
            ListController::new(&*client, &this.state, &this.notifier)
                .set_page_size(size)
                .await;
        });
    }

    /// Submit `form`; `on_saved` runs before the list is re-fetched.
    pub fn save<F>(
        &self,
        form: F,
        on_saved: impl FnOnce() + 'static,
        on_invalid: impl FnOnce(FieldErrors) + 'static,
    ) where
        F: MutationForm + 'static,
    {
        if self.busy.get_untracked() {
            return;
        }
        let this = *self;
        let client = self.client();
        this.busy.set(true);
        spawn_local(async move {
            let coordinator = MutationCoordinator::new(
                ListController::new(&*client, &this.state, &this.notifier),
                this.singular,
            );
            let outcome = coordinator.save(&form, |_| on_saved()).await;
            if let SaveOutcome::Invalid(errors) = outcome {
                on_invalid(errors);
            }
            let _ = this.busy.try_set(false);
        });
    }

    pub fn delete(&self, id: String, on_deleted: impl FnOnce() + 'static) {
        let this = *self;
        let client = self.client();
        this.busy.set(true);
        spawn_local(async move {
            let coordinator = MutationCoordinator::new(
                ListController::new(&*client, &this.state, &this.notifier),
                this.singular,
            );
            let _ = coordinator.delete(&id, on_deleted).await;
            let _ = this.busy.try_set(false);
        });
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
