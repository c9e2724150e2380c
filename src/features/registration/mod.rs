//! Registration feature: profile fields plus 2 to 5 webcam captures submitted
//! as one request. The form state lives here so the route only wires inputs
//! and the camera to it.

pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod types;
