//! Analysis result data model — the typed shape the generative model's
//! JSON payload is parsed into, and the snapshot the dashboard renders.
//!
//! Field names use camelCase on the wire to match the declared response
//! schema (`analysis::schema`).

use serde::{Deserialize, Serialize};

use super::enums::{InsightSeverity, TestStatus};

/// One extracted lab test result.
///
/// `status` is the upstream classifier's label and stays authoritative
/// for display. The renderer only uses `range_min`/`range_max` to draw
/// the gauge and to decide value emphasis (`render::status`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMetric {
    pub test_name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub range_min: Option<f64>,
    #[serde(default)]
    pub range_max: Option<f64>,
    #[serde(default)]
    pub status: TestStatus,
    #[serde(default)]
    pub category: String,
}

impl ExtractedMetric {
    /// Both reference bounds present — the metric can carry a gauge.
    pub fn has_range(&self) -> bool {
        self.range_min.is_some() && self.range_max.is_some()
    }
}

/// A narrative observation correlating one or more metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningInsight {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub related_metrics: Vec<String>,
    #[serde(default)]
    pub severity: InsightSeverity,
}

/// One complete analysis of an uploaded report.
///
/// Constructed once per successful analysis call and held as an
/// immutable snapshot for the lifetime of the displayed session;
/// replaced wholesale on a new upload, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub metrics: Vec<ExtractedMetric>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub insights: Vec<ReasoningInsight>,
    #[serde(default)]
    pub doctor_questions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_deserializes_from_camel_case_payload() {
        let json = r#"{
            "testName": "Hemoglobin",
            "value": 13.2,
            "unit": "g/dL",
            "rangeMin": 12.0,
            "rangeMax": 15.5,
            "status": "Normal",
            "category": "Hematology"
        }"#;

        let metric: ExtractedMetric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.test_name, "Hemoglobin");
        assert_eq!(metric.value, 13.2);
        assert_eq!(metric.range_min, Some(12.0));
        assert_eq!(metric.range_max, Some(15.5));
        assert_eq!(metric.status, TestStatus::Normal);
        assert!(metric.has_range());
    }

    #[test]
    fn metric_tolerates_absent_range_and_status() {
        let json = r#"{"testName": "Color", "value": 0.0, "unit": ""}"#;
        let metric: ExtractedMetric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.range_min, None);
        assert_eq!(metric.range_max, None);
        assert_eq!(metric.status, TestStatus::Unknown);
        assert_eq!(metric.category, "");
        assert!(!metric.has_range());
    }

    #[test]
    fn metric_with_one_bound_has_no_range() {
        let json = r#"{"testName": "CRP", "value": 1.0, "unit": "mg/L", "rangeMax": 5.0}"#;
        let metric: ExtractedMetric = serde_json::from_str(json).unwrap();
        assert!(!metric.has_range());
    }

    #[test]
    fn result_deserializes_full_payload() {
        let json = r#"{
            "metrics": [
                {"testName": "Glucose", "value": 105.0, "unit": "mg/dL",
                 "rangeMin": 70.0, "rangeMax": 100.0, "status": "High",
                 "category": "Metabolic"}
            ],
            "summary": "Slightly elevated fasting glucose.",
            "insights": [
                {"title": "Glucose above range",
                 "description": "Fasting glucose is above the reference range.",
                 "relatedMetrics": ["Glucose"],
                 "severity": "warning"}
            ],
            "doctorQuestions": ["Should I repeat the fasting glucose test?"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.metrics.len(), 1);
        assert_eq!(result.insights[0].severity, InsightSeverity::Warning);
        assert_eq!(result.insights[0].related_metrics, vec!["Glucose"]);
        assert_eq!(result.doctor_questions.len(), 1);
    }

    #[test]
    fn result_tolerates_missing_sections() {
        let result: AnalysisResult = serde_json::from_str(r#"{"metrics": []}"#).unwrap();
        assert!(result.metrics.is_empty());
        assert!(result.summary.is_empty());
        assert!(result.insights.is_empty());
        assert!(result.doctor_questions.is_empty());
    }

    #[test]
    fn result_round_trips_wire_names() {
        let result = AnalysisResult {
            metrics: vec![],
            summary: "ok".into(),
            insights: vec![],
            doctor_questions: vec!["Q1".into()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("doctorQuestions").is_some());
        assert!(json.get("doctor_questions").is_none());
    }
}
