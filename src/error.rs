//! Error types for brand generation and chat

use thiserror::Error;

/// Errors surfaced by the brand orchestrator, chat session, and Gemini client.
///
/// Every variant is terminal for the in-flight operation: there is no retry
/// or partial result. The caller decides how to present the failure.
#[derive(Debug, Error)]
pub enum BrandwiseError {
    /// Input rejected before any network call was made
    #[error("invalid input: {0}")]
    Validation(String),

    /// The structured-generation response could not be parsed or violated
    /// the expected plan shape
    #[error("received invalid structured data: {0}")]
    Schema(String),

    /// An image-generation response contained zero images
    #[error("image generation failed: {0}")]
    AssetGeneration(String),

    /// Underlying network failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success reply from the generative service
    #[error("service error {status}: {message}")]
    Service { status: u16, message: String },

    /// JSON serialization plumbing
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BrandwiseError {
    /// True if the failure happened before any request left the process
    pub fn is_validation(&self) -> bool {
        matches!(self, BrandwiseError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, BrandwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = BrandwiseError::Validation("mission must not be blank".to_string());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "invalid input: mission must not be blank"
        );
    }

    #[test]
    fn test_service_display_carries_status() {
        let err = BrandwiseError::Service {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BrandwiseError = parse_err.into();
        assert!(matches!(err, BrandwiseError::Json(_)));
    }
}
