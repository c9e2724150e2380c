//! Auth feature module covering the two-step face login, the stored session
//! token, and route gating. It keeps the flow rules out of the UI. Requests
//! and responses here carry face captures and tokens, so nothing in this
//! module may log payloads.
//!
//! Flow Overview: Login looks the user up by name, then submits one capture for
//! that name and stores the returned token. Any verification failure returns
//! the flow to the name step after a short delay. Logout clears the token.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod login;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
