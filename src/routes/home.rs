//! Landing page. Static content with links into the login and registration
//! flows.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-md mx-auto text-center space-y-6 py-8">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                    "Face Recognition Login"
                </h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "Sign in with your name and a quick face scan. New here? Register with a few photos first."
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <A
                        href=paths::LOGIN
                        {..}
                        class="inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-all shadow-sm"
                    >
                        "Login"
                    </A>
                    <A
                        href=paths::REGISTER
                        {..}
                        class="inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-all"
                    >
                        "Register"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
