//! Session context shared through Leptos. The provider reads the stored token
//! once on mount and mirrors its presence in a signal so guards and routes
//! react to sign-in and sign-out without polling storage.

use crate::features::auth::{
    guards,
    session::{LocalStorageSessionStore, SessionStore},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    store: LocalStorageSessionStore,
    authenticated: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(store: LocalStorageSessionStore) -> Self {
        let authenticated = RwSignal::new(store.is_authenticated());
        Self {
            store,
            authenticated,
            is_authenticated: authenticated.into(),
        }
    }

    pub fn store(&self) -> LocalStorageSessionStore {
        self.store
    }

    /// Re-reads storage after the login flow wrote a token.
    pub fn refresh(&self) {
        self.authenticated.set(self.store.is_authenticated());
    }

    /// Clears the token and returns where to navigate next.
    pub fn sign_out(&self) -> &'static str {
        let next = guards::logout(&self.store);
        self.authenticated.set(false);
        next
    }
}

/// Provides the session context for the whole app.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new(LocalStorageSessionStore::new()));

    view! { {children()} }
}

/// Returns the current session context or a fresh one read from storage.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(LocalStorageSessionStore::new()))
}
