use crate::features::auth::session::SessionStore;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(&'static str),
}

/// Grants access whenever a token is stored. The token is not validated here;
/// real access control must live on the API.
pub fn check_access<S: SessionStore + ?Sized>(store: &S) -> Access {
    if store.is_authenticated() {
        Access::Granted
    } else {
        Access::Redirect(LOGIN_PATH)
    }
}

/// Clears the session and returns where to navigate next.
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> &'static str {
    store.clear();
    log::info!("signed out");
    LOGIN_PATH
}
