use contracts::domain::common::{Identifiable, Resource};
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud::client::FALLBACK_MESSAGE;
use crate::shared::crud::notify::Notifier;
use crate::shared::crud::{HttpResourceClient, ResourceClient};
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;

/// Enough for every picker the dashboard has.
pub const OPTIONS_LIMIT: usize = 100;

/// `(id, label)` pairs of a select box
pub type Options = RwSignal<Vec<(String, String)>>;

/// Fill `target` with the first [`OPTIONS_LIMIT`] items of `R`.
pub fn load_options<R>(target: Options, label: fn(&R) -> String)
where
    R: Resource<Item = R> + Identifiable,
{
    let (auth_state, _) = use_auth();
    let credential = auth_state.get_untracked().credential();
    let notifier = use_notifications();

    spawn_local(async move {
        let client = HttpResourceClient::<R>::from_config(credential);
        match client.list(PageRequest::first(OPTIONS_LIMIT)).await {
            Ok(page) => {
                let options = page
                    .items
                    .iter()
                    .map(|item| (item.id().to_string(), label(item)))
                    .collect();
                let _ = target.try_set(options);
            }
            Err(e) => {
                log::warn!("failed to load {} options: {}", R::SINGULAR, e);
                notifier.request_failed(&e, FALLBACK_MESSAGE);
            }
        }
    });
}

/// Label of `id` among `options`, or the id itself when it is unknown
pub fn option_label(options: &[(String, String)], id: &str) -> String {
    options
        .iter()
        .find(|(value, _)| value == id)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        let options = vec![("c1".to_string(), "Books".to_string())];
        assert_eq!(option_label(&options, "c1"), "Books");
        assert_eq!(option_label(&options, "c2"), "c2");
        assert_eq!(option_label(&[], ""), "");
    }
}
