//! # shotqa Gemini
//!
//! Sends screenshots to the Gemini `generateContent` endpoint and extracts
//! the generated text.

pub mod client;
pub mod types;

pub use client::{GeminiClient, GeminiConfig};
