//! Live camera preview. The component owns the `MediaStream` for its lifetime
//! and the parent reads frames through the shared `NodeRef`.

use crate::components::{Alert, AlertKind};
use crate::features::camera::{
    StreamTarget, stream_target,
    webcam::{attach_stream, open_stream, stop_stream},
};
use leptos::{html::Video, prelude::*, task::spawn_local};
use web_sys::MediaStream;

#[component]
pub fn Webcam(video_ref: NodeRef<Video>) -> impl IntoView {
    let stream: StoredValue<Option<MediaStream>, LocalStorage> = StoredValue::new_local(None);
    let (camera_error, set_camera_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match open_stream().await {
            Ok(opened) => {
                // The ref belongs to the parent page, which may already be gone.
                match stream_target(video_ref.try_get_untracked()) {
                    StreamTarget::Attach(video) => attach_stream(&video, &opened).await,
                    StreamTarget::Hold => {}
                    StreamTarget::Release => {
                        stop_stream(&opened);
                        return;
                    }
                }
                match stream.try_write_value() {
                    Some(mut slot) => {
                        *slot = Some(opened);
                        log::info!("camera stream opened");
                    }
                    // Unmounted before permission was granted.
                    None => stop_stream(&opened),
                }
            }
            Err(err) => {
                log::warn!("camera unavailable");
                let _ = set_camera_error.try_set(Some(err.user_message("Camera unavailable.")));
            }
        }
    });

    on_cleanup(move || {
        if let Some(mut slot) = stream.try_write_value() {
            if let Some(opened) = slot.take() {
                stop_stream(&opened);
                log::debug!("camera stream stopped");
            }
        }
    });

    view! {
        <div class="space-y-3">
            <video
                node_ref=video_ref
                class="w-full rounded-lg bg-gray-900 aspect-video"
                autoplay=true
                muted=true
                playsinline=true
            ></video>
            {move || {
                camera_error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
        </div>
    }
}
