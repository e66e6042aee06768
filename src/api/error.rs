//! API error types

use thiserror::Error;

/// Failure of a remote call or of preparing one
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, with the backend message when the body carried one
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    /// Envelope with `success: false`
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Malformed response body
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The owning request scope was cancelled
    #[error("Request cancelled")]
    Cancelled,

    /// A selected file could not be read
    #[error("Could not read file: {0}")]
    FileRead(String),
}

impl ApiError {
    /// Message to show the user: the backend's own wording when it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            ApiError::FileRead(detail) => format!("Could not read file: {}", detail),
            _ => fallback.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_wording() {
        let rejected = ApiError::Rejected("Duplicate SKU".to_string());
        assert_eq!(rejected.user_message("Failed to add item."), "Duplicate SKU");

        let status = ApiError::Status { status: 400, message: Some("Bad image".to_string()) };
        assert_eq!(status.user_message("Failed"), "Bad image");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Rejected(String::new()).user_message("Failed to add item."), "Failed to add item.");
        assert_eq!(ApiError::Status { status: 502, message: None }.user_message("Failed"), "Failed");
        assert_eq!(ApiError::Cancelled.user_message("Failed"), "Failed");
    }
}
