//! Gemini `generateContent` wire types.
//!
//! The response side reads a single path
//! (`candidates[0].content.parts[0].text`); everything else stays in the raw
//! JSON value.

use serde::Serialize;
use shotqa_core::NO_ANALYSIS_GENERATED;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 image, forwarded exactly as received.
    pub data: String,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GenerateContentRequest {
    /// A single user turn: the image first, then the prompt.
    pub fn image_with_prompt(
        mime_type: &str,
        image_base64: &str,
        prompt: &str,
        generation_config: GenerationConfig,
    ) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: image_base64.to_string(),
                        },
                    },
                    Part::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
            generation_config,
        }
    }
}

/// JSON pointer to the only response field we consume.
pub const ANALYSIS_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Text of the first part of the first candidate, if any.
///
/// Only that path is inspected; later candidates and parts may have any shape.
pub fn first_text(raw: &serde_json::Value) -> Option<&str> {
    raw.pointer(ANALYSIS_TEXT_POINTER)?.as_str()
}

/// Pull the analysis text out of a raw provider payload.
///
/// Falls back to [`NO_ANALYSIS_GENERATED`] when the text is missing, empty, or
/// not a string.
pub fn extract_analysis(raw: &serde_json::Value) -> String {
    match first_text(raw) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_ANALYSIS_GENERATED.to_string(),
    }
}
