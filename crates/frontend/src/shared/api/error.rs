use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
///
/// Never retried: the call site turns it into a short-lived message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Session expired")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Server error {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Encode(String),
}

/// Error body returned by the server for rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Maps a non-success status and its body
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Server {
                status,
                message: serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(|b| b.message)
                    .filter(|m| !m.trim().is_empty()),
            },
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                message: Some(m), ..
            } => Some(m.as_str()),
            _ => None,
        }
    }

    /// Message shown to the user: the server's own explanation when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            _ => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(409, r#"{"message":"Tag already exists"}"#),
            ApiError::Server {
                status: 409,
                message: Some("Tag already exists".into())
            }
        );
        assert_eq!(
            ApiError::from_status(500, "<html>oops</html>"),
            ApiError::Server {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let e = ApiError::from_status(400, r#"{"message":"Quantity too large"}"#);
        assert_eq!(e.user_message("Failed to save."), "Quantity too large");
        let e = ApiError::Network("offline".into());
        assert_eq!(e.user_message("Failed to save."), "Failed to save.");
        let e = ApiError::from_status(400, r#"{"message":"  "}"#);
        assert_eq!(e.user_message("Failed to save."), "Failed to save.");
    }
}
