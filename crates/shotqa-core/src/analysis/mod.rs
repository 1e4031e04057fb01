//! Screenshot analysis pipeline.
//!
//! Validate the request, pick the prompt for its focus, and make one call
//! through the relay.

pub mod model;

use tracing::{debug, info};

use crate::error::{ShotqaError, ShotqaResult};
use crate::prompt::AnalysisFocus;
use crate::relay::VisionRelay;
use model::{AnalysisRequest, AnalysisResult};

/// Run a single analysis.
///
/// A missing or empty `image_base64` fails before the relay is touched.
pub async fn analyze(relay: &dyn VisionRelay, request: AnalysisRequest) -> ShotqaResult<AnalysisResult> {
    let image_base64 = match request.image_base64.as_deref() {
        Some(image) if !image.is_empty() => image,
        _ => return Err(ShotqaError::MissingField("image_base64")),
    };

    let focus = AnalysisFocus::from_identifier(request.analysis_focus.as_deref());
    debug!(
        requested = ?request.analysis_focus,
        focus = focus.identifier(),
        image_len = image_base64.len(),
        "Selected prompt"
    );

    let outcome = relay.analyze_image(image_base64, focus.prompt()).await?;
    info!(
        model = relay.model_name(),
        focus = focus.identifier(),
        analysis_len = outcome.analysis.len(),
        "Analysis completed"
    );

    Ok(AnalysisResult {
        success: true,
        analysis: outcome.analysis,
        raw: outcome.raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{BUG_DETECTION_PROMPT, GENERAL_PROMPT};
    use crate::relay::VisionOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Relay that records its calls and returns a canned result.
    struct StubRelay {
        calls: Mutex<Vec<(String, String)>>,
        reply: fn() -> ShotqaResult<VisionOutcome>,
    }

    impl StubRelay {
        fn new(reply: fn() -> ShotqaResult<VisionOutcome>) -> Self {
            Self { calls: Mutex::new(Vec::new()), reply }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VisionRelay for StubRelay {
        async fn analyze_image(&self, image_base64: &str, prompt: &str) -> ShotqaResult<VisionOutcome> {
            self.calls
                .lock()
                .unwrap()
                .push((image_base64.to_string(), prompt.to_string()));
            (self.reply)()
        }

        fn model_name(&self) -> &str {
            "stub"
        }
    }

    fn no_bugs() -> ShotqaResult<VisionOutcome> {
        Ok(VisionOutcome {
            analysis: "No visual bugs detected.".to_string(),
            raw: serde_json::json!({"candidates": [{"content": {"parts": [{"text": "No visual bugs detected."}]}}]}),
        })
    }

    fn quota_exceeded() -> ShotqaResult<VisionOutcome> {
        Err(ShotqaError::Provider {
            status: 503,
            body: "quota exceeded".to_string(),
        })
    }

    #[tokio::test]
    async fn test_missing_image_skips_relay() {
        let relay = StubRelay::new(no_bugs);

        let err = analyze(&relay, AnalysisRequest::default()).await.unwrap_err();
        assert!(matches!(err, ShotqaError::MissingField("image_base64")));

        let err = analyze(&relay, AnalysisRequest::new("", Some("bug_detection")))
            .await
            .unwrap_err();
        assert!(matches!(err, ShotqaError::MissingField("image_base64")));

        assert!(relay.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_passes_text_through() {
        let relay = StubRelay::new(no_bugs);

        let result = analyze(&relay, AnalysisRequest::new("iVBORw0KGgo", Some("bug_detection")))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.analysis, "No visual bugs detected.");
        assert!(result.raw["candidates"].is_array());

        let calls = relay.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "iVBORw0KGgo");
        assert_eq!(calls[0].1, BUG_DETECTION_PROMPT);
    }

    #[tokio::test]
    async fn test_unknown_focus_uses_general_prompt() {
        let relay = StubRelay::new(no_bugs);

        analyze(&relay, AnalysisRequest::new("abc", Some("general"))).await.unwrap();
        analyze(&relay, AnalysisRequest::new("abc", None)).await.unwrap();

        let calls = relay.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, prompt)| prompt == GENERAL_PROMPT));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let relay = StubRelay::new(quota_exceeded);

        let err = analyze(&relay, AnalysisRequest::new("abc", None)).await.unwrap_err();
        match err {
            ShotqaError::Provider { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
