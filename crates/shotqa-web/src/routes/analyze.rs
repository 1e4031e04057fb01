//! Analysis route handler.

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use shotqa_core::{analysis, AnalysisRequest, AnalysisResult};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/gemini/analyze-image
///
/// The body is parsed as JSON regardless of its declared content type. Bodies
/// that are not JSON objects carry no fields.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn analyze_image(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let body = body?;
    let request = AnalysisRequest::from_json(serde_json::from_slice(&body)?)?;
    info!(
        body_len = body.len(),
        focus = request.analysis_focus.as_deref().unwrap_or("<none>"),
        "Received analysis request"
    );

    let result = analysis::analyze(state.relay.as_ref(), request).await?;
    Ok(Json(result))
}
