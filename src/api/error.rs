//! Error handling for the admin API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a body that is not the expected JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The server answered 404: the record or the endpoint does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The request was understood but refused (`success: false`).
    #[error("Request refused: {message}")]
    Application { message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        let message = Self::extract_message(&body);

        if status == 404 {
            ApiError::NotFound { message }
        } else {
            ApiError::Http { status, message }
        }
    }

    /// Builds the error for a decoded body whose `success` flag is false.
    pub fn refused(message: Option<String>) -> ApiError {
        ApiError::Application {
            message: message
                .map(|msg| msg.trim().to_string())
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| "The server rejected the request".to_string()),
        }
    }

    /// Prefer the `message` field of a JSON error body; drop HTML error pages.
    fn extract_message(body: &str) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                return msg.trim().to_string();
            }
        }
        let lowered = body.to_lowercase();
        if lowered.contains("<html") || lowered.contains("<!doctype") {
            return String::new();
        }
        body.trim().to_string()
    }

    /// Text suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Reqwest(e) if e.is_timeout() => "The server did not respond in time".into(),
            ApiError::Reqwest(_) => "Could not reach the server".into(),
            ApiError::Decode(_) => "The server sent a response that could not be read".into(),
            ApiError::Http { status, message } if message.is_empty() => {
                format!("Request failed with status {}", status)
            }
            ApiError::Http { status, message } => format!("{} (HTTP {})", message, status),
            ApiError::NotFound { message } if message.is_empty() => "Not found".into(),
            ApiError::NotFound { message } | ApiError::Application { message } => message.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_message() {
        assert_eq!(
            ApiError::extract_message(r#"{"success": false, "message": " Email taken "}"#),
            "Email taken"
        );
    }

    #[test]
    fn drops_html_error_pages() {
        assert_eq!(
            ApiError::extract_message("<!DOCTYPE html><html><body>502</body></html>"),
            ""
        );
    }

    #[test]
    fn refused_uses_fallback_for_blank_message() {
        assert_eq!(
            ApiError::refused(Some("  ".into())).user_message(),
            "The server rejected the request"
        );
        assert_eq!(ApiError::refused(Some("No".into())).user_message(), "No");
    }

    #[test]
    fn http_message_mentions_status() {
        let error = ApiError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(error.user_message(), "Request failed with status 500");
    }
}
