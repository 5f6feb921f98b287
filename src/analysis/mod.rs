pub mod chat;
pub mod gemini;
pub mod orchestrator;
pub mod prompt;
pub mod schema;

use thiserror::Error;

use gemini::GeminiError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no medical data detected in the document")]
    EmptyResult,

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}

impl AnalysisError {
    /// User-facing message; detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyResult => {
                "Could not detect any medical data. Please ensure the image is a clear medical report."
            }
            AnalysisError::AnalysisFailed(_) => {
                "Failed to analyze the document. Please ensure the image is clear and try again."
            }
        }
    }
}

impl From<GeminiError> for AnalysisError {
    fn from(err: GeminiError) -> Self {
        AnalysisError::AnalysisFailed(err.to_string())
    }
}
