use leptos::prelude::*;

use super::storage;
use crate::shared::crud::Credential;
use crate::shared::notifications::NotificationService;

#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Credential handed to resource clients built while this state holds.
    pub fn credential(&self) -> Credential {
        match &self.token {
            Some(token) => Credential::bearer(token.clone()),
            None => Credential::anonymous(),
        }
    }
}

/// Auth context provider component
///
/// Restores the session from localStorage on mount. A 401 reported through
/// the notification service signs the user out.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
    });
    if let Some(notices) = use_context::<NotificationService>() {
        notices.on_session_expired(Callback::new(move |_| {
            if auth_state.get_untracked().is_authenticated() {
                sign_out(set_auth_state);
            }
        }));
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist `token` and switch the app to the signed-in state
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, token: String) {
    storage::save_token(&token);
    set_auth_state.set(AuthState { token: Some(token) });
}

pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_follows_token() {
        assert!(!AuthState::default().credential().is_present());
        let state = AuthState {
            token: Some("abc".into()),
        };
        assert!(state.is_authenticated());
        assert_eq!(state.credential(), Credential::bearer("abc"));
    }
}
