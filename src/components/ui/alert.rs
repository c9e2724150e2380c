//! Alert banners for status messages. Messages must be safe to render and
//! should never include tokens or image data.

use crate::features::status::{StatusMessage, Tone};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Warning,
}

impl From<Tone> for AlertKind {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Success => AlertKind::Success,
            Tone::Warning => AlertKind::Warning,
            Tone::Error => AlertKind::Error,
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        AlertKind::Warning => {
            "rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm text-amber-700 dark:border-amber-400 dark:bg-amber-900/30 dark:text-amber-200"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}

/// Renders the current flow message, if any, in the colour of its tone.
#[component]
pub fn StatusAlert(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <div class="mt-4">
                    <Alert kind=AlertKind::from(message.tone) message=message.text />
                </div>
            }
        })
    }
}
