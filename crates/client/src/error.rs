//! Client error type
//!
//! Every failure on the write path ends in a blocking alert, so besides the
//! technical `Display` each variant also knows its user-facing text.

use haven_core::HavenError;
use serde_json::Value;
use thiserror::Error;

/// Errors from the backend, the image hosts or client-side rejection
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// An image host did not return a usable URL
    #[error("Image upload failed: {0}")]
    UploadFailed(String),

    /// The draft failed validation, nothing was sent
    #[error("Rejected before sending: {0}")]
    Rejected(#[source] HavenError),

    /// The client could not be built from configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build a `Status` error, pulling a message out of a JSON error body
    /// when the server sent one
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
            })
            .unwrap_or_else(|| {
                let text = body.trim();
                if text.is_empty() || text.len() > 200 {
                    format!("Server returned status {status}")
                } else {
                    text.to_string()
                }
            });
        ClientError::Status { status, message }
    }

    /// Whether this is a "not found" (404) error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Whether the request was never sent because the draft was invalid
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Get the user-facing error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => {
                "Unable to connect to the server. Please check your connection.".to_string()
            }
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "Received an unexpected response from the server.".to_string(),
            Self::UploadFailed(_) => "The image could not be uploaded. Please try again.".to_string(),
            Self::Rejected(err) => match err {
                HavenError::Validation(msg) => msg.clone(),
                HavenError::FieldInvalid { message, .. } => message.clone(),
                HavenError::ImageMissing { .. } => {
                    "Please wait for the image to finish uploading.".to_string()
                }
                other => other.to_string(),
            },
            Self::Config(msg) => format!("The application is misconfigured: {msg}"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_from_json_body() {
        let err = ClientError::from_status(400, r#"{"message":"Title already exists"}"#);
        assert_eq!(err.user_message(), "Title already exists");
    }

    #[test]
    fn test_status_message_fallback() {
        let err = ClientError::from_status(502, "");
        assert_eq!(err.user_message(), "Server returned status 502");
        assert!(!err.is_not_found());
        assert!(ClientError::from_status(404, "Not Found").is_not_found());
    }

    #[test]
    fn test_rejected_uses_validation_text() {
        let err = ClientError::Rejected(HavenError::invalid("title", "Title is required"));
        assert!(err.is_rejected());
        assert_eq!(err.user_message(), "Title is required");
    }
}
