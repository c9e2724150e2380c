//! Camera frames captured for registration and verification. Frames are held
//! in memory as self-contained `data:image/...` URLs and sent as-is to the
//! backend. They are biometric data and must never be logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod webcam;

use serde::Serialize;
use std::fmt;

/// MIME type used when encoding captured frames.
pub const CAPTURE_MIME_TYPE: &str = "image/jpeg";

/// A single still frame encoded as a data URL.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapturedImage(String);

impl CapturedImage {
    /// Wraps an encoded frame. Canvas encoders return `"data:,"` when the
    /// source had no pixels, so anything without an image payload is rejected.
    pub fn from_data_url(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let (header, payload) = value.split_once(',')?;
        if !header.starts_with("data:image/") || payload.is_empty() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "CapturedImage({} bytes)", self.0.len())
    }
}

/// Where a freshly opened stream goes, given the preview element as read
/// from a possibly disposed reference (`None` means the view is gone).
#[derive(Debug, PartialEq, Eq)]
pub enum StreamTarget<E> {
    Attach(E),
    /// The view is alive but the element is not mounted yet.
    Hold,
    /// The view unmounted while permission was pending; stop the stream.
    Release,
}

pub fn stream_target<E>(element: Option<Option<E>>) -> StreamTarget<E> {
    match element {
        Some(Some(element)) => StreamTarget::Attach(element),
        Some(None) => StreamTarget::Hold,
        None => StreamTarget::Release,
    }
}

#[cfg(test)]
pub(crate) fn test_frame(tag: &str) -> CapturedImage {
    CapturedImage(format!("data:image/jpeg;base64,{tag}"))
}
