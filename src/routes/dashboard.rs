//! Post-login landing page. Nothing is fetched from the backend; the only
//! action is signing out.

use crate::components::{AppShell, RequireSession};
use crate::features::auth::state::use_session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <DashboardContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let next = session.sign_out();
        navigate(next, Default::default());
    };

    view! {
        <div class="max-w-md mx-auto text-center space-y-6 py-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Welcome to your Dashboard"</h1>
            <p class="text-gray-500 dark:text-gray-400">"You are signed in with face recognition."</p>
            <button
                type="button"
                on:click=on_logout
                class="inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-all"
            >
                "Logout"
            </button>
        </div>
    }
}
