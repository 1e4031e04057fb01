//! HTTP error responses.
//!
//! Every failure leaves the server as a JSON body of the form
//! `{ "error": ..., "details"?: ... }`.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shotqa_core::ShotqaError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    Core(ShotqaError),
    PayloadTooLarge(String),
}

impl From<ShotqaError> for ApiError {
    fn from(err: ShotqaError) -> Self {
        Self::Core(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Core(ShotqaError::Json(err))
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::Core(ShotqaError::InvalidBody(rejection.body_text()))
        }
    }
}

impl ApiError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::Core(err @ ShotqaError::MissingField(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody { error: err.to_string(), details: None },
            ),
            ApiError::Core(ShotqaError::Provider { status, body }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorBody {
                    error: format!("Gemini API error: {}", status),
                    details: Some(body),
                },
            ),
            ApiError::Core(err) => {
                tracing::error!(error = %err, "Analysis request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error".to_string(),
                        details: Some(err.to_string()),
                    },
                )
            }
            ApiError::PayloadTooLarge(details) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorBody {
                    error: "Payload too large".to_string(),
                    details: Some(details),
                },
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
