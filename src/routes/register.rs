use crate::components::{AppShell, Button, Spinner, StatusAlert, Webcam};
use crate::features::camera::webcam::capture_frame;
use crate::features::registration::client;
use crate::features::registration::form::{CaptureOutcome, Field, RegistrationForm};
use crate::features::registration::types::RegisterRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::{html::Video, prelude::*};
use leptos_router::components::A;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::new());
    let video_ref = NodeRef::<Video>::new();

    let photos = Memo::new(move |_| form.with(|form| form.photos().to_vec()));
    let message = Signal::derive(move || form.with(|form| form.message().cloned()));
    let in_flight = Signal::derive(move || form.with(RegistrationForm::is_in_flight));
    let capture_disabled = Signal::derive(move || !form.with(RegistrationForm::can_capture));

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            form.update(|form| form.complete_submit(result));
        }
    });

    let on_capture = Callback::new(move |()| {
        let frame = video_ref
            .get_untracked()
            .and_then(|video| capture_frame(&video));
        if let Some(CaptureOutcome::Added(count)) =
            form.try_update(|form| form.capture_photo(frame))
        {
            log::debug!("captured registration photo {count}");
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(request) = form.try_update(RegistrationForm::begin_submit).flatten() {
            register_action.dispatch(request);
        }
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto space-y-5">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Register"</h1>
                <form class="space-y-5" on:submit=on_submit>
                    <ProfileInput form=form field=Field::Name label="Name" input_type="text" />
                    <ProfileInput form=form field=Field::Email label="Email" input_type="email" />
                    <ProfileInput
                        form=form
                        field=Field::Phone
                        label="Phone (optional)"
                        input_type="tel"
                    />
                    <Webcam video_ref=video_ref />
                    <Button disabled=capture_disabled on_click=on_capture>
                        {move || form.with(RegistrationForm::capture_label)}
                    </Button>
                    <div class="grid grid-cols-5 gap-2">
                        {move || {
                            photos
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, photo)| {
                                    view! {
                                        <img
                                            class="rounded border border-gray-200 dark:border-gray-600"
                                            src=photo.as_str().to_string()
                                            alt=format!("Capture {}", index + 1)
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <Button button_type="submit" disabled=in_flight>
                        "Register"
                    </Button>
                </form>
                {move || in_flight.get().then_some(view! { <Spinner label="Registering..." /> })}
                <StatusAlert message=message />
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Already registered? "
                    <A href=paths::LOGIN {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Login here"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}

#[component]
fn ProfileInput(
    form: RwSignal<RegistrationForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let id = match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Phone => "phone",
    };

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=INPUT_CLASS
                prop:value=move || form.with(|form| form.field(field).to_string())
                disabled=move || form.with(RegistrationForm::is_in_flight)
                on:input=move |event| {
                    form.update(|form| form.set_field(field, event_target_value(&event)));
                }
            />
        </div>
    }
}
