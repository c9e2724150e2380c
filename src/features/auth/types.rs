//! Request and response types for the lookup and verification endpoints.
//! Verification payloads carry a face capture and the response carries the
//! session token, so they must never be logged.

use crate::features::camera::CapturedImage;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FindUserRequest {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyFaceRequest {
    pub name: String,
    pub photo: CapturedImage,
}

#[derive(Clone, Deserialize)]
pub struct VerifyFaceResponse {
    pub token: String,
}
