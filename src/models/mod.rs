pub mod enums;
pub mod report;

pub use enums::{InsightSeverity, StatusTier, TestStatus};
pub use report::{AnalysisResult, ExtractedMetric, ReasoningInsight};
