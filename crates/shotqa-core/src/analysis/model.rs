//! Analysis request and result models.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{ShotqaError, ShotqaResult};

/// Returned in place of the model's text when the reply carries none.
pub const NO_ANALYSIS_GENERATED: &str = "No analysis generated";

/// Inbound analysis request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    /// `null`, `false`, and `0` count as absent.
    #[serde(default, deserialize_with = "image_string")]
    pub image_base64: Option<String>,
    /// Non-string values are treated as absent.
    #[serde(default, deserialize_with = "lenient_string")]
    pub analysis_focus: Option<String>,
}

impl AnalysisRequest {
    pub fn new(image_base64: impl Into<String>, analysis_focus: Option<&str>) -> Self {
        Self {
            image_base64: Some(image_base64.into()),
            analysis_focus: analysis_focus.map(str::to_string),
        }
    }

    /// Decode a request from an arbitrary JSON body.
    ///
    /// Arrays and scalars carry no fields and decode to an empty request.
    /// A bare `null` body is rejected.
    pub fn from_json(value: Value) -> ShotqaResult<Self> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            Value::Null => Err(ShotqaError::InvalidBody("request body is null".to_string())),
            _ => Ok(Self::default()),
        }
    }
}

/// Successful analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub analysis: String,
    pub raw: serde_json::Value,
}

fn image_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(other) => Err(de::Error::custom(format!(
            "image_base64 must be a string, got {other}"
        ))),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_both_fields() {
        let req: AnalysisRequest = serde_json::from_str(
            r#"{"image_base64": "iVBORw0KGgo=", "analysis_focus": "ux_analysis"}"#,
        )
        .unwrap();
        assert_eq!(req.image_base64.as_deref(), Some("iVBORw0KGgo="));
        assert_eq!(req.analysis_focus.as_deref(), Some("ux_analysis"));
    }

    #[test]
    fn test_request_missing_fields() {
        let req: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image_base64.is_none());
        assert!(req.analysis_focus.is_none());
    }

    #[test]
    fn test_non_string_focus_is_absent() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"image_base64": "abc", "analysis_focus": 42}"#).unwrap();
        assert!(req.analysis_focus.is_none());

        let req: AnalysisRequest =
            serde_json::from_str(r#"{"image_base64": "abc", "analysis_focus": null}"#).unwrap();
        assert!(req.analysis_focus.is_none());
    }

    #[test]
    fn test_falsy_image_is_absent() {
        for body in [
            r#"{"image_base64": null}"#,
            r#"{"image_base64": false}"#,
            r#"{"image_base64": 0}"#,
            r#"{"image_base64": 0.0}"#,
        ] {
            let req: AnalysisRequest = serde_json::from_str(body).unwrap();
            assert!(req.image_base64.is_none(), "body: {}", body);
        }
    }

    #[test]
    fn test_truthy_non_string_image_is_rejected() {
        for body in [r#"{"image_base64": true}"#, r#"{"image_base64": 5}"#, r#"{"image_base64": ["AAAA"]}"#] {
            assert!(serde_json::from_str::<AnalysisRequest>(body).is_err(), "body: {}", body);
        }
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        for body in [json!(["AAAA"]), json!("AAAA"), json!(42), json!(true)] {
            let req = AnalysisRequest::from_json(body.clone()).unwrap();
            assert!(req.image_base64.is_none(), "body: {}", body);
            assert!(req.analysis_focus.is_none());
        }
    }

    #[test]
    fn test_null_body_is_rejected() {
        let err = AnalysisRequest::from_json(Value::Null).unwrap_err();
        assert!(matches!(err, ShotqaError::InvalidBody(_)));
    }

    #[test]
    fn test_object_body_decodes_fields() {
        let req = AnalysisRequest::from_json(json!({"image_base64": "AAAA", "analysis_focus": "ux_analysis"}))
            .unwrap();
        assert_eq!(req.image_base64.as_deref(), Some("AAAA"));
        assert_eq!(req.analysis_focus.as_deref(), Some("ux_analysis"));
    }

    #[test]
    fn test_result_serialization() {
        let result = AnalysisResult {
            success: true,
            analysis: "No visual bugs detected.".to_string(),
            raw: serde_json::json!({"candidates": []}),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["analysis"], "No visual bugs detected.");
        assert_eq!(json["raw"]["candidates"], serde_json::json!([]));
    }
}
