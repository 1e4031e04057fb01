//! Gemini HTTP client.
//!
//! Posts to `/{version}/models/{model}:generateContent` with the API key in
//! the `key` query parameter. One request per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use shotqa_core::{ShotqaError, ShotqaResult, VisionOutcome, VisionRelay};
use tracing::{debug, warn};

use crate::types::{extract_analysis, GenerateContentRequest, GenerationConfig};

/// Default Gemini API URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default vision model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// MIME type declared for every uploaded image.
pub const IMAGE_MIME_TYPE: &str = "image/png";

pub const DEFAULT_TEMPERATURE: f64 = 0.4;

pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    pub model: String,
    pub mime_type: String,
    pub generation: GenerationConfig,
    /// No timeout unless set.
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            mime_type: IMAGE_MIME_TYPE.to_string(),
            generation: GenerationConfig {
                temperature: DEFAULT_TEMPERATURE,
                max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            },
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint URL without the credential.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, self.api_version, self.model
        )
    }
}

/// Gemini vision client.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client. Fails when the API key is blank.
    pub fn new(config: GeminiConfig) -> ShotqaResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ShotqaError::config("Gemini API key is empty"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ShotqaError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl VisionRelay for GeminiClient {
    async fn analyze_image(&self, image_base64: &str, prompt: &str) -> ShotqaResult<VisionOutcome> {
        let request = GenerateContentRequest::image_with_prompt(
            &self.config.mime_type,
            image_base64,
            prompt,
            self.config.generation,
        );

        let url = self.config.endpoint();
        debug!(url = %url, model = %self.config.model, image_len = image_base64.len(), "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            // Strip the URL: it carries the API key.
            .map_err(|e| ShotqaError::transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ShotqaError::transport(e.without_url().to_string()))?;
            warn!(status = status.as_u16(), body_len = body.len(), "Gemini API returned an error");
            return Err(ShotqaError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ShotqaError::transport(e.without_url().to_string()))?;
        let raw: serde_json::Value = serde_json::from_str(&body)?;
        let analysis = extract_analysis(&raw);

        debug!(analysis_len = analysis.len(), "Gemini response parsed");

        Ok(VisionOutcome { analysis, raw })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::new("secret");
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1/models/gemini-1.5-pro:generateContent"
        );
        assert_eq!(config.mime_type, "image/png");
        assert_eq!(config.generation.max_output_tokens, 2048);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_endpoint_with_overrides() {
        let config = GeminiConfig::new("secret")
            .with_base_url("http://127.0.0.1:9999/")
            .with_model("gemini-2.0-flash");
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9999/v1/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let err = GeminiClient::new(GeminiConfig::new("  ")).err().unwrap();
        assert!(matches!(err, ShotqaError::Config(_)));
    }

    #[test]
    fn test_model_name() {
        let client = GeminiClient::new(GeminiConfig::new("k").with_model("gemini-test")).unwrap();
        assert_eq!(client.model_name(), "gemini-test");
    }

    #[test]
    fn test_client_exposes_keyless_endpoint() {
        let client = GeminiClient::new(GeminiConfig::new("secret-key")).unwrap();
        let endpoint = client.config().endpoint();
        assert!(endpoint.ends_with("/v1/models/gemini-1.5-pro:generateContent"));
        assert!(!endpoint.contains("secret-key"));
    }
}
