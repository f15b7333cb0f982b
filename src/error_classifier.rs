use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps admin API failures to the severity they are logged and displayed with.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, error: &ApiError) -> LogLevel {
        match error {
            // Critical: the session is not allowed to do this at all
            ApiError::Http { status, .. } if *status == 401 || *status == 403 => LogLevel::Error,

            // Server-side trouble, usually temporary
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // A server that answers with something we cannot read is a real bug
            ApiError::Decode(_) => LogLevel::Error,

            // The server understood us and said no
            ApiError::Application { .. } => LogLevel::Info,

            ApiError::NotFound { .. } => LogLevel::Warn,

            // Network issues and other HTTP statuses
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn auth_failures_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify(&http(403)), LogLevel::Error);
    }

    #[test]
    fn server_and_client_failures_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify(&http(502)), LogLevel::Warn);
        assert_eq!(classifier.classify(&http(400)), LogLevel::Warn);
        assert_eq!(
            classifier.classify(&ApiError::NotFound {
                message: "gone".into()
            }),
            LogLevel::Warn
        );
    }

    #[test]
    fn application_refusals_are_info() {
        let classifier = ErrorClassifier::new();
        let error = ApiError::Application {
            message: "Email already in use".into(),
        };
        assert_eq!(classifier.classify(&error), LogLevel::Info);
    }
}
