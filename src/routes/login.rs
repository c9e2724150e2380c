use crate::components::{AppShell, Button, Spinner, StatusAlert, Webcam};
use crate::features::auth::login::{LoginFlow, LoginStep, VerifyOutcome};
use crate::features::auth::state::use_session;
use crate::features::auth::types::{FindUserRequest, VerifyFaceRequest};
use crate::features::auth::client;
use crate::features::camera::webcam::capture_frame;
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::{html::Video, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::new());
    let video_ref = NodeRef::<Video>::new();

    // Only re-render the step body when the step itself changes.
    let step = Memo::new(move |_| flow.with(|flow| flow.step().clone()));
    let message = Signal::derive(move || flow.with(|flow| flow.message().cloned()));
    let busy = Signal::derive(move || flow.with(LoginFlow::is_busy));
    let in_flight = Signal::derive(move || flow.with(LoginFlow::is_in_flight));

    let lookup_action = Action::new_local(move |request: &FindUserRequest| {
        let request = request.clone();
        async move { client::find_user(&request).await }
    });

    let verify_action = Action::new_local(move |request: &VerifyFaceRequest| {
        let request = request.clone();
        async move { client::verify_face(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = lookup_action.value().get() {
            flow.update(|flow| flow.complete_lookup(result));
        }
    });

    Effect::new(move |_| {
        let Some(result) = verify_action.value().get() else {
            return;
        };
        let store = session.store();
        match flow.try_update(|flow| flow.complete_verify(result, &store)) {
            Some(VerifyOutcome::Authenticated) => {
                session.refresh();
                navigate(paths::DASHBOARD, Default::default());
            }
            Some(VerifyOutcome::ResetAfter(delay)) => {
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                Timeout::new(millis, move || {
                    flow.try_update(LoginFlow::reset);
                })
                .forget();
            }
            None => {}
        }
    });

    let on_lookup = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(request) = flow.try_update(LoginFlow::begin_lookup).flatten() {
            lookup_action.dispatch(request);
        }
    };

    let on_verify = Callback::new(move |()| {
        let frame = video_ref
            .get_untracked()
            .and_then(|video| capture_frame(&video));
        if let Some(request) = flow.try_update(|flow| flow.begin_verify(frame)).flatten() {
            verify_action.dispatch(request);
        }
    });

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-5">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Login"</h1>
                {move || match step.get() {
                    LoginStep::AwaitingName => {
                        view! {
                            <form on:submit=on_lookup>
                                <div class="mb-5">
                                    <label
                                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                        for="name"
                                    >
                                        "Your name"
                                    </label>
                                    <input
                                        id="name"
                                        type="text"
                                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                                        autocomplete="name"
                                        prop:value=move || flow.with(|flow| flow.name_input().to_string())
                                        on:input=move |event| {
                                            flow.update(|flow| flow.set_name_input(event_target_value(&event)));
                                        }
                                    />
                                </div>
                                <Button button_type="submit" disabled=busy>
                                    "Next"
                                </Button>
                            </form>
                        }
                            .into_any()
                    }
                    LoginStep::AwaitingFace { .. } => {
                        view! {
                            <div class="space-y-4">
                                <p class="text-gray-700 dark:text-gray-300">
                                    {move || flow.with(LoginFlow::greeting)}
                                </p>
                                <Webcam video_ref=video_ref />
                                <Button disabled=busy on_click=on_verify>
                                    "Verify Face"
                                </Button>
                            </div>
                        }
                            .into_any()
                    }
                }}
                {move || in_flight.get().then_some(view! { <Spinner label="Checking..." /> })}
                <StatusAlert message=message />
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Don't have an account? "
                    <A href=paths::REGISTER {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Register here"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
