use crate::features::auth::{
    guards::{Access, check_access},
    state::use_session,
};
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Renders `children` only while a session token is stored; otherwise
/// redirects to the login page. UX-only guard; the API must enforce access.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || {
        // Track sign-out so the guard re-evaluates without a reload.
        session.is_authenticated.track();
        match check_access(&session.store()) {
            Access::Granted => children().into_any(),
            Access::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        }
    }
}
