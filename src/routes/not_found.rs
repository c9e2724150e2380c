use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                <h1 class="text-6xl font-black text-gray-200 dark:text-gray-700 select-none">"404"</h1>
                <p class="text-gray-500 dark:text-gray-400">"Page not found."</p>
                <A
                    href=paths::HOME
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-all"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
