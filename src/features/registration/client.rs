use crate::{
    app_lib::{AppError, post_json_lenient},
    features::registration::types::{RegisterRequest, RegisterResponse},
};

/// Submits the profile and every capture in one request. Any 2xx counts as
/// registered; an empty or unexpected body just means no custom message.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
    post_json_lenient("/register", request).await
}
