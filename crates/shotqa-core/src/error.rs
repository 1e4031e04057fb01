//! Centralized error types for shotqa.

use thiserror::Error;

/// Main error type for shotqa operations.
#[derive(Error, Debug)]
pub enum ShotqaError {
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The provider answered with a non-success status.
    #[error("Gemini API error: {status}")]
    Provider { status: u16, body: String },

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for shotqa operations.
pub type ShotqaResult<T> = Result<T, ShotqaError>;

impl ShotqaError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ShotqaError::MissingField("image_base64");
        assert_eq!(err.to_string(), "image_base64 is required");
    }

    #[test]
    fn test_provider_message_carries_status_only() {
        let err = ShotqaError::Provider {
            status: 503,
            body: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error: 503");
    }
}
