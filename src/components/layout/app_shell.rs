//! Shared layout wrapper with the header and content container. Navigation is
//! client-side only; the backend must enforce access control.

use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let is_authenticated = use_session().is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="flex items-center">
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "FaceAuth"
                        </span>
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-row space-x-6">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=|| {
                                    view! {
                                        <li>
                                            <A href=paths::LOGIN {..} class=NAV_LINK_CLASS>
                                                "Login"
                                            </A>
                                        </li>
                                        <li>
                                            <A href=paths::REGISTER {..} class=NAV_LINK_CLASS>
                                                "Register"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A href=paths::DASHBOARD {..} class=NAV_LINK_CLASS>
                                        "Dashboard"
                                    </A>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1 w-full max-w-screen-xl mx-auto px-4 py-8">{children()}</main>
        </div>
    }
}
