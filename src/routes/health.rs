use crate::app_lib::GIT_COMMIT_HASH;
use crate::components::AppShell;
use leptos::prelude::*;

/// Shows the commit the bundle was built from.
#[component]
pub fn HealthPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-neutral-200 bg-white dark:border-neutral-300 dark:bg-neutral-600">
                    <div class="border-b-2 border-[#0000002d] px-6 py-3 text-neutral-600 dark:text-neutral-50 font-semibold">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-base text-black dark:text-neutral-50">
                            {GIT_COMMIT_HASH}
                        </pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
