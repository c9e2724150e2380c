//! Browser camera access through `getUserMedia` and frame capture through an
//! off-screen canvas. The stream is video-only and must be stopped when the
//! owning view unmounts so the camera light turns off.

use super::{CAPTURE_MIME_TYPE, CapturedImage};
use crate::app_lib::AppError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// `HTMLMediaElement.HAVE_CURRENT_DATA`: a frame is available for drawing.
const HAVE_CURRENT_DATA: u16 = 2;

/// Requests a video-only camera stream from the browser.
pub async fn open_stream() -> Result<MediaStream, AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Config("No browser window available.".to_string()))?;
    let devices = window.navigator().media_devices().map_err(|_| {
        AppError::Config("Camera access is not supported by this browser.".to_string())
    })?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|err| camera_error(&err))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|err| camera_error(&err))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| AppError::Config("Camera returned an unexpected stream.".to_string()))
}

/// Attaches a stream to a `<video>` element and starts playback.
pub async fn attach_stream(video: &HtmlVideoElement, stream: &MediaStream) {
    video.set_src_object(Some(stream));
    if let Ok(promise) = video.play() {
        if JsFuture::from(promise).await.is_err() {
            log::warn!("camera preview did not start playing");
        }
    }
}

/// Stops every track of the stream, releasing the camera.
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Grabs the frame currently shown by `video`, or `None` when the camera has
/// not produced one yet.
pub fn capture_frame(video: &HtmlVideoElement) -> Option<CapturedImage> {
    if video.ready_state() < HAVE_CURRENT_DATA {
        return None;
    }
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return None;
    }

    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .ok()?;

    let data_url = canvas.to_data_url_with_type(CAPTURE_MIME_TYPE).ok()?;
    CapturedImage::from_data_url(data_url)
}

fn camera_error(err: &JsValue) -> AppError {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| "permission denied or no camera found".to_string());
    AppError::Config(format!("Camera unavailable: {detail}"))
}
