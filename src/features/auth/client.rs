//! Client wrappers for the lookup and verification endpoints. Each wrapper is
//! a single attempt; the login flow decides what the outcome means.

use crate::{
    app_lib::{AppError, post_json, post_json_response},
    features::auth::types::{FindUserRequest, VerifyFaceRequest, VerifyFaceResponse},
};

/// Confirms that a user with the given name is registered.
/// Any 2xx is a match; the response body is not consumed.
pub async fn find_user(request: &FindUserRequest) -> Result<(), AppError> {
    post_json("/find-user", request).await
}

/// Submits one face capture for the confirmed name and returns the session token.
/// Must never log the request (it carries the capture) or the response.
pub async fn verify_face(request: &VerifyFaceRequest) -> Result<VerifyFaceResponse, AppError> {
    post_json_response("/verify-face", request).await
}
