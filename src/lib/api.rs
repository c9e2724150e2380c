//! HTTP helpers for the backend's JSON API with consistent error handling.
//! Feature clients use these helpers to avoid duplicating request setup. Each
//! call is a single attempt: no retry and no client-side timeout beyond what
//! the browser's network stack applies.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Error payload returned by the backend on failure.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Posts JSON and ignores any response body on success.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(path, body).await?;
    handle_empty_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(path, body).await?;
    handle_json_response(response).await
}

/// Posts JSON and treats any 2xx as success. The body is decoded when it
/// matches `T`; empty or unexpected bodies yield `T::default()`.
pub async fn post_json_lenient<B: Serialize, T: DeserializeOwned + Default>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(path, body).await?;
    if response.ok() {
        let text = response.text().await.unwrap_or_default();
        Ok(decode_lenient(&text))
    } else {
        Err(rejected(response).await)
    }
}

async fn send_json<B: Serialize>(path: &str, body: &B) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    request.send().await.map_err(map_request_error)
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// A failed `fetch` means the backend was never reached.
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(err.to_string())
}

/// Parses JSON responses and surfaces HTTP errors with the backend's message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(rejected(response).await)
    }
}

/// Accepts any 2xx response without reading its body.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(rejected(response).await)
    }
}

async fn rejected(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Rejected {
        status,
        message: parse_error_body(&body),
    }
}

/// Extracts the `error` field from a failure body, trimmed and truncated.
/// Bodies that are not JSON or carry no message yield `None`.
fn parse_error_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body.trim()).ok()?;
    let message = parsed.error?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

fn decode_lenient<T: DeserializeOwned + Default>(body: &str) -> T {
    serde_json::from_str(body.trim()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{MAX_ERROR_CHARS, build_url_with_base, decode_lenient, parse_error_body};
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Acknowledgement {
        #[serde(default)]
        message: Option<String>,
    }

    #[test]
    fn decode_lenient_reads_matching_bodies() {
        assert_eq!(
            decode_lenient::<Acknowledgement>(r#"{"message": "Registration successful!"}"#),
            Acknowledgement {
                message: Some("Registration successful!".to_string())
            }
        );
        assert_eq!(
            decode_lenient::<Acknowledgement>("{}"),
            Acknowledgement::default()
        );
    }

    #[test]
    fn decode_lenient_defaults_on_empty_or_foreign_bodies() {
        assert_eq!(decode_lenient::<Acknowledgement>(""), Acknowledgement::default());
        assert_eq!(decode_lenient::<Acknowledgement>("OK"), Acknowledgement::default());
        assert_eq!(
            decode_lenient::<Acknowledgement>(r#"["created"]"#),
            Acknowledgement::default()
        );
    }

    #[test]
    fn build_url_with_base_joins_without_duplicate_slashes() {
        assert_eq!(
            build_url_with_base("http://127.0.0.1:5001/", "/find-user"),
            "http://127.0.0.1:5001/find-user"
        );
        assert_eq!(
            build_url_with_base("http://127.0.0.1:5001", "verify-face"),
            "http://127.0.0.1:5001/verify-face"
        );
        assert_eq!(build_url_with_base("  ", "/register"), "/register");
    }

    #[test]
    fn parse_error_body_reads_error_field() {
        assert_eq!(
            parse_error_body(r#"{"error": "User not found"}"#),
            Some("User not found".to_string())
        );
        assert_eq!(
            parse_error_body(r#"{"error": "  Face does not match  ", "code": 7}"#),
            Some("Face does not match".to_string())
        );
    }

    #[test]
    fn parse_error_body_ignores_unusable_bodies() {
        assert_eq!(parse_error_body(""), None);
        assert_eq!(parse_error_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(parse_error_body(r#"{"message": "nope"}"#), None);
        assert_eq!(parse_error_body(r#"{"error": "   "}"#), None);
        assert_eq!(parse_error_body(r#"{"error": null}"#), None);
    }

    #[test]
    fn parse_error_body_truncates_long_messages() {
        let body = format!(r#"{{"error": "{}"}}"#, "x".repeat(MAX_ERROR_CHARS + 50));
        let message = parse_error_body(&body).unwrap_or_default();
        assert_eq!(message.chars().count(), MAX_ERROR_CHARS);
    }
}
