//! Vision relay abstraction.

use async_trait::async_trait;

use crate::error::ShotqaResult;

/// Text extracted from a provider reply, plus the reply itself.
#[derive(Debug, Clone)]
pub struct VisionOutcome {
    pub analysis: String,
    /// Full provider payload. Diagnostic only; callers should not rely on its shape.
    pub raw: serde_json::Value,
}

/// One round trip to a multimodal model: an inline image plus a prompt in,
/// generated text out.
#[async_trait]
pub trait VisionRelay: Send + Sync {
    /// Send a base64-encoded image with the given prompt.
    ///
    /// Fails with [`crate::ShotqaError::Provider`] when the provider answers
    /// with a non-success status.
    async fn analyze_image(&self, image_base64: &str, prompt: &str) -> ShotqaResult<VisionOutcome>;

    /// Name of the model behind this relay.
    fn model_name(&self) -> &str;
}
