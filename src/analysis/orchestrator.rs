//! Analysis orchestration — uploaded file bytes to a validated
//! [`AnalysisResult`].
//!
//! The external model does all extraction and interpretation; this
//! layer encodes the file, issues the call with the fixed instruction
//! and declared schema, parses the payload, and enforces the one local
//! post-condition: an empty metrics list is a failure even when the
//! remote call succeeded (the image was not a readable report).

use std::sync::Arc;

use base64::Engine as _;

use crate::models::AnalysisResult;

use super::gemini::GenerativeClient;
use super::prompt::EXTRACTION_INSTRUCTION;
use super::schema::analysis_response_schema;
use super::AnalysisError;

#[derive(Clone)]
pub struct ReportAnalyzer {
    client: Arc<dyn GenerativeClient>,
}

impl ReportAnalyzer {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Analyze one uploaded report.
    pub async fn analyze(
        &self,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let start = std::time::Instant::now();
        tracing::info!(mime_type, size = bytes.len(), "analyzing report");

        let data = base64::engine::general_purpose::STANDARD.encode(bytes);
        let schema = analysis_response_schema();

        let payload = self
            .client
            .extract_document(mime_type, &data, EXTRACTION_INSTRUCTION, &schema)
            .await?;

        let result = parse_analysis_payload(&payload)?;

        if result.metrics.is_empty() {
            tracing::warn!("remote call succeeded but extracted no metrics");
            return Err(AnalysisError::EmptyResult);
        }

        tracing::info!(
            metric_count = result.metrics.len(),
            insight_count = result.insights.len(),
            elapsed_ms = %start.elapsed().as_millis(),
            "analysis complete"
        );
        Ok(result)
    }
}

/// Parse the model's JSON payload into an [`AnalysisResult`].
///
/// JSON response mode normally yields a bare object, but the payload is
/// model-authored: if direct parsing fails, retry on the outermost
/// brace-delimited slice (stray prose or code fences around the JSON).
fn parse_analysis_payload(payload: &str) -> Result<AnalysisResult, AnalysisError> {
    match serde_json::from_str(payload) {
        Ok(result) => Ok(result),
        Err(first_err) => {
            let start = payload.find('{');
            let end = payload.rfind('}');
            if let (Some(start), Some(end)) = (start, end) {
                if start < end {
                    if let Ok(result) = serde_json::from_str(&payload[start..=end]) {
                        return Ok(result);
                    }
                }
            }
            Err(AnalysisError::AnalysisFailed(format!(
                "malformed analysis payload: {first_err}"
            )))
        }
    }
}
