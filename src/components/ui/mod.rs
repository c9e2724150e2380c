mod alert;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind, StatusAlert};
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
