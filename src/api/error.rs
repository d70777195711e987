use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - token may be expired")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error bodies are JSON `{error, message, code}`; only `message` matters.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Extract the backend's `message` field when the body is JSON,
    /// falling back to the (truncated) raw body.
    fn body_message(body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.message {
                if !message.is_empty() {
                    return message;
                }
            }
        }
        Self::truncate_body(body)
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::body_message(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(message),
            404 => ApiError::NotFound(message),
            408 => ApiError::Timeout,
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(message),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, message)),
        }
    }

    /// User-facing message for this error, keyed on the failure class.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please login again.",
            ApiError::AccessDenied(_) => "You do not have permission to perform this action.",
            ApiError::NotFound(_) => "The requested resource was not found.",
            ApiError::Timeout => "Request timeout. Please try again.",
            ApiError::RateLimited => "Too many requests. Please wait a moment and try again.",
            ApiError::ServerError(_) => "Server error. Please try again later.",
            ApiError::Network(err) => {
                if err.is_timeout() {
                    "Request timeout. Please try again."
                } else {
                    "Network error. Please check your internet connection."
                }
            }
            ApiError::InvalidResponse(_) => "An unexpected error occurred.",
        }
        .to_string()
    }
}

/// User-facing message for any error in the client stack. API failures map
/// through their taxonomy; everything else falls back to its display form.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ApiError>() {
        Some(api) => api.user_message(),
        None => err.to_string(),
    }
}
