//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::analysis::AnalysisError;
use crate::core_state::CoreError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no report available")]
    NoReport,
    #[error("no medical data detected")]
    EmptyResult,
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NoReport => (
                StatusCode::NOT_FOUND,
                "NO_REPORT",
                "No analysis result available. Upload a report first.".to_string(),
            ),
            ApiError::EmptyResult => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_MEDICAL_DATA",
                AnalysisError::EmptyResult.user_message().to_string(),
            ),
            ApiError::AnalysisFailed(detail) => {
                tracing::error!(detail, "analysis failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_FAILED",
                    AnalysisError::AnalysisFailed(String::new())
                        .user_message()
                        .to_string(),
                )
            }
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyResult => ApiError::EmptyResult,
            AnalysisError::AnalysisFailed(detail) => ApiError::AnalysisFailed(detail),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn no_report_returns_404() {
        let response = ApiError::NoReport.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NO_REPORT");
    }

    #[tokio::test]
    async fn empty_result_returns_422_with_user_message() {
        let response = ApiError::EmptyResult.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NO_MEDICAL_DATA");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Could not detect"));
    }

    #[tokio::test]
    async fn analysis_failure_returns_502_and_hides_detail() {
        let response = ApiError::AnalysisFailed("socket reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "ANALYSIS_FAILED");
        let message = json["error"]["message"].as_str().unwrap();
        assert!(!message.contains("socket reset"));
        assert!(message.contains("try again"));
    }

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("Message cannot be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn internal_returns_500_and_hides_detail() {
        let response = ApiError::Internal("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn analysis_error_maps_by_variant() {
        let api: ApiError = AnalysisError::EmptyResult.into();
        assert_eq!(api.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let api: ApiError = AnalysisError::AnalysisFailed("x".into()).into();
        assert_eq!(api.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
