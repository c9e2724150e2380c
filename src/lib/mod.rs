//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Backend Contract
//!
//! The face recognition backend exposes three JSON endpoints:
//!
//! 1. **Lookup:** `POST /find-user` with `{ name }` confirms the user exists.
//! 2. **Verification:** `POST /verify-face` with `{ name, photo }` returns `{ token }`.
//! 3. **Registration:** `POST /register` with the profile and 2-5 photos returns
//!    an optional `{ message }`.
//!
//! Failures carry `{ error }`. The session token returned by verification is
//! opaque to the client and is only stored, never parsed.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features. Callers must avoid logging tokens or photo payloads.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use api::{post_json, post_json_lenient, post_json_response};
pub(crate) use errors::AppError;
