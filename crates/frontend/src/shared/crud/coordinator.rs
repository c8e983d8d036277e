//! Create, update and delete against a list, keeping the list consistent
//! with what the server holds afterwards.

use contracts::domain::common::Identifiable;
use contracts::shared::api::Saved;
use contracts::shared::forms::{FieldErrors, Validate};

use super::client::{ApiError, RequestBody, ResourceClient, FALLBACK_MESSAGE};
use super::controller::ListController;
use super::notify::Notifier;
use super::store::ListStore;

/// A form that can be submitted to a [`ResourceClient`].
pub trait MutationForm: Validate {
    /// `Some` when the form edits an existing item.
    fn edit_id(&self) -> Option<&str>;

    fn body(&self) -> Result<RequestBody, ApiError>;
}

#[derive(Debug)]
pub enum SaveOutcome<T> {
    /// Nothing was sent
    Invalid(FieldErrors),
    Failed(ApiError),
    Saved(Saved<T>),
}

impl<T> SaveOutcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Validate `form` and, when it is valid, create or update the item.
///
/// Exactly one notification is raised for every submission that reaches the
/// server. Invalid forms raise none; their errors belong next to the fields.
pub async fn submit<T, F, N>(
    client: &dyn ResourceClient<T>,
    form: &F,
    notifier: &N,
    singular: &str,
) -> SaveOutcome<T>
where
    F: MutationForm,
    N: Notifier,
{
    let errors = form.validate();
    if !errors.is_valid() {
        log::debug!(
            "{} form has invalid fields: {}",
            singular,
            errors.fields().collect::<Vec<_>>().join(", ")
        );
        return SaveOutcome::Invalid(errors);
    }
    let body = match form.body() {
        Ok(body) => body,
        Err(e) => {
            notifier.request_failed(&e, FALLBACK_MESSAGE);
            return SaveOutcome::Failed(e);
        }
    };

    let (result, verb) = match form.edit_id() {
        Some(id) => (client.update(id, body).await, "updated"),
        None => (client.create(body).await, "added"),
    };
    match result {
        Ok(saved) => {
            let message = saved
                .message
                .clone()
                .unwrap_or_else(|| format!("{} {} successfully", singular, verb));
            notifier.success(message);
            SaveOutcome::Saved(saved)
        }
        Err(e) => {
            log::warn!("{} was not {}: {}", singular, verb, e);
            notifier.request_failed(&e, FALLBACK_MESSAGE);
            SaveOutcome::Failed(e)
        }
    }
}

/// Mutations on the items of one list.
pub struct MutationCoordinator<'a, T, S, N> {
    list: ListController<'a, T, S, N>,
    singular: &'static str,
}

impl<'a, T, S, N> MutationCoordinator<'a, T, S, N>
where
    T: Identifiable,
    S: ListStore<T>,
    N: Notifier,
{
    pub fn new(list: ListController<'a, T, S, N>, singular: &'static str) -> Self {
        Self { list, singular }
    }

    /// On success `on_saved` runs first (close the dialog, clear the form),
    /// then the current page is re-fetched.
    pub async fn save<F: MutationForm>(
        &self,
        form: &F,
        on_saved: impl FnOnce(&Saved<T>),
    ) -> SaveOutcome<T> {
        let outcome = submit(self.list.client(), form, self.list.notifier(), self.singular).await;
        if let SaveOutcome::Saved(saved) = &outcome {
            on_saved(saved);
            self.list.refresh().await;
        }
        outcome
    }

    /// On failure the list is left as it is and nothing is re-fetched.
    pub async fn delete(&self, id: &str, on_deleted: impl FnOnce()) -> Result<(), ApiError> {
        match self.list.client().delete(id).await {
            Ok(message) => {
                let message =
                    message.unwrap_or_else(|| format!("{} deleted successfully", self.singular));
                self.list.notifier().success(message);
                on_deleted();
                self.list.refresh_after_delete(id).await;
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to delete {} {}: {}", self.singular, id, e);
                let fallback = format!("Failed to delete {}", self.singular.to_lowercase());
                self.list.notifier().request_failed(&e, &fallback);
                Err(e)
            }
        }
    }
}
