//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod require_session;
pub(crate) mod ui;
mod webcam;

pub(crate) use layout::AppShell;
pub(crate) use require_session::RequireSession;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner, StatusAlert};
pub(crate) use webcam::Webcam;
