// ============================================================================
// API CLIENT - HTTP ONLY (Stateless)
// ============================================================================
// No business logic here, only requests against the hotel backend. Every
// call returns the uniform ApiResponse envelope or a tagged ApiError.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::models::ApiResponse;
use crate::utils::constants::{API_BASE_URL, STORAGE_KEY_AUTH_TOKEN};
use crate::utils::storage;

/// Failure taxonomy, kept distinguishable for callers that want to branch:
/// transport problems, HTTP error statuses, and server-side rejections that
/// arrived inside a structurally valid envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network unreachable, request build failure, or a body that is not
    /// valid JSON for the expected shape.
    Transport(String),
    /// Non-success HTTP status with the server-provided message, or the
    /// generic fallback when the error body is unparsable.
    Status { code: u16, message: String },
    /// The envelope said `success: false`; carries its `message`.
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "{}", message),
            ApiError::Status { message, .. } => write!(f, "{}", message),
            ApiError::Rejected(message) => write!(f, "{}", message),
        }
    }
}

/// Extract the error message from an HTTP error body, falling back to the
/// generic `API error: <status>` string when the body has no parsable
/// `message` field.
pub fn status_message(code: u16, body: Option<&str>) -> String {
    body.and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("API error: {}", code))
}

pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

fn with_default_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match storage::load_string(STORAGE_KEY_AUTH_TOKEN) {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiResponse<T>, ApiError> {
    if !response.ok() {
        let code = response.status();
        let body = response.text().await.ok();
        let message = status_message(code, body.as_deref());
        log::error!("❌ API request failed: HTTP {} ({})", code, message);
        return Err(ApiError::Status { code, message });
    }

    // A malformed 200 body is a transport-class failure; a well-formed body
    // is passed through uninspected, success flag included.
    response.json::<ApiResponse<T>>().await.map_err(|e| {
        log::error!("❌ API response parse failed: {}", e);
        ApiError::Transport(format!("Parse error: {}", e))
    })
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<ApiResponse<T>, ApiError> {
    let url = format!("{}{}", API_BASE_URL, path);
    let response = with_default_headers(Request::get(&url))
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ GET {} failed: {}", path, e);
            ApiError::Transport(format!("Network error: {}", e))
        })?;
    handle_response(response).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<ApiResponse<T>, ApiError> {
    send_json(Request::post(&format!("{}{}", API_BASE_URL, path)), path, body).await
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    builder: RequestBuilder,
    path: &str,
    body: &B,
) -> Result<ApiResponse<T>, ApiError> {
    let response = with_default_headers(builder)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ Request to {} failed: {}", path, e);
            ApiError::Transport(format!("Network error: {}", e))
        })?;
    handle_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_error_body_uses_generic_fallback() {
        assert_eq!(status_message(500, None), "API error: 500");
        assert_eq!(status_message(500, Some("<html>oops</html>")), "API error: 500");
        assert_eq!(status_message(404, Some("{}")), "API error: 404");
    }

    #[test]
    fn structured_error_body_surfaces_its_message() {
        let body = r#"{"message":"Invalid reservation code"}"#;
        assert_eq!(status_message(400, Some(body)), "Invalid reservation code");
    }

    #[test]
    fn bearer_header_wraps_the_token() {
        assert_eq!(bearer_value("abc123"), "Bearer abc123");
    }

    #[test]
    fn display_projects_the_message_for_every_kind() {
        let transport = ApiError::Transport("Network error: offline".into());
        let status = ApiError::Status {
            code: 500,
            message: "API error: 500".into(),
        };
        let rejected = ApiError::Rejected("Room not found".into());
        assert_eq!(transport.to_string(), "Network error: offline");
        assert_eq!(status.to_string(), "API error: 500");
        assert_eq!(rejected.to_string(), "Room not found");
    }
}
