//! Error helpers for the HTTP transport.

use runtime::ApiError;
use thiserror::Error;

/// Failure to construct the HTTP client.
#[derive(Debug, Error)]
pub enum HttpSetupError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Map a transport-level reqwest failure.
pub(crate) fn network(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Network(format!("request timed out: {}", error))
    } else {
        ApiError::Network(error.to_string())
    }
}

/// Extract the user-facing failure detail from an error response body.
///
/// The backend answers failures with either a bare JSON string, a problem
/// object (`message` or `title`), or plain text. An empty body falls back to
/// the status line.
pub(crate) fn error_detail(body: &str, status: reqwest::StatusCode) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(serde_json::Value::Object(fields)) => ["message", "title"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(|v| v.as_str()))
            .map_or_else(|| trimmed.to_string(), str::to_string),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn plain_text_body_is_verbatim() {
        assert_eq!(
            error_detail("Service error", StatusCode::INTERNAL_SERVER_ERROR),
            "Service error"
        );
    }

    #[test]
    fn json_string_body_is_unwrapped() {
        assert_eq!(
            error_detail("\"Invalid floor\"", StatusCode::BAD_REQUEST),
            "Invalid floor"
        );
    }

    #[test]
    fn problem_object_uses_message_then_title() {
        assert_eq!(
            error_detail(r#"{"message":"Elevator offline"}"#, StatusCode::BAD_GATEWAY),
            "Elevator offline"
        );
        assert_eq!(
            error_detail(
                r#"{"title":"One or more validation errors occurred.","status":400}"#,
                StatusCode::BAD_REQUEST
            ),
            "One or more validation errors occurred."
        );
        assert_eq!(
            error_detail(r#"{"code":7}"#, StatusCode::BAD_REQUEST),
            r#"{"code":7}"#
        );
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        assert_eq!(
            error_detail("  ", StatusCode::SERVICE_UNAVAILABLE),
            "503 Service Unavailable"
        );
    }
}
