use crate::features::camera::CapturedImage;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    /// Optional on the form; sent as an empty string when blank.
    pub phone: String,
    pub photos: Vec<CapturedImage>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}
