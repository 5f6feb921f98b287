//! `GET /api/report` — the current dashboard view.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::ReportPhase;
use crate::render::view::{build_report_view, ReportView};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Current report. 404 when nothing has been uploaded yet; a failed
/// analysis is reported with its user-facing message.
pub async fn current(State(ctx): State<ApiContext>) -> Result<Json<ReportResponse>, ApiError> {
    match ctx.core.report_phase()? {
        ReportPhase::Idle => Err(ApiError::NoReport),
        ReportPhase::Analyzing => Ok(Json(ReportResponse {
            phase: "analyzing",
            report: None,
            error: None,
        })),
        ReportPhase::Ready(result) => Ok(Json(ReportResponse {
            phase: "ready",
            report: Some(build_report_view(&result)),
            error: None,
        })),
        ReportPhase::Failed(message) => Ok(Json(ReportResponse {
            phase: "failed",
            report: None,
            error: Some(message),
        })),
    }
}
