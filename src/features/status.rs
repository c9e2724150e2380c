//! Transient status line shown under the login and registration forms.

use crate::app_lib::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }

    /// `fallback` is used when the backend rejected the request without saying why.
    pub fn from_error(err: &AppError, fallback: &str) -> Self {
        let kind = err.kind();
        log::debug!("surfacing {kind:?} failure to the view");
        Self::error(err.user_message(fallback))
    }
}
