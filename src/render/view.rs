//! Dashboard view builder — turns an [`AnalysisResult`] snapshot into
//! the fully rendered, serializable view the dashboard page displays.
//!
//! All presentation decisions live here: key-metric selection, grouped
//! table rows, gauge SVG embedding, severity icons, and the disclaimer.

use serde::Serialize;

use crate::models::{AnalysisResult, ExtractedMetric, InsightSeverity, StatusTier, TestStatus};

use super::gauge::GaugeGeometry;
use super::grouping::group_by_category;
use super::status::{is_outside_range, status_tier};

/// Fixed disclaimer line shown under every report.
pub const DISCLAIMER: &str = "AI analysis for informational purposes only. \
Results may contain errors. Always consult a physician for medical advice.";

/// Tests promoted to the gauge card row when present with a full range.
pub const KEY_METRIC_NAMES: &[&str] = &[
    "Glucose",
    "Cholesterol",
    "HDL",
    "LDL",
    "Triglycerides",
    "Hemoglobin",
    "Ferritin",
    "TSH",
    "Vitamin D",
    "A1C",
];

/// At most this many gauge cards on the dashboard.
pub const MAX_KEY_METRICS: usize = 4;

/// Gauge card width — larger than the table gauges.
const CARD_GAUGE_WIDTH: f64 = 140.0;

/// Icon shown next to an insight, by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightIcon {
    Warning,
    Check,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub summary: String,
    pub key_metrics: Vec<GaugeCard>,
    pub categories: Vec<CategoryView>,
    pub insights: Vec<InsightView>,
    pub doctor_questions: Vec<String>,
    pub disclaimer: &'static str,
}

/// One key-metric gauge card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeCard {
    pub test_name: String,
    pub display_value: String,
    pub unit: String,
    pub range_min: f64,
    pub range_max: f64,
    pub out_of_range: bool,
    pub svg: String,
}

/// One category section of the detailed table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub name: String,
    pub test_count: usize,
    pub rows: Vec<MetricRow>,
}

/// One table row. `gauge_svg` is present when the metric carries a full
/// reference range; otherwise the row falls back to the status badge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub test_name: String,
    pub display_value: String,
    pub unit: String,
    pub reference_range: Option<String>,
    pub status: TestStatus,
    pub tier: StatusTier,
    pub out_of_range: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauge_svg: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightView {
    pub title: String,
    pub description: String,
    pub related_metrics: Vec<String>,
    pub severity: InsightSeverity,
    pub icon: InsightIcon,
}

/// Build the full dashboard view for one analysis result.
pub fn build_report_view(result: &AnalysisResult) -> ReportView {
    ReportView {
        summary: result.summary.clone(),
        key_metrics: key_metric_cards(&result.metrics),
        categories: category_views(&result.metrics),
        insights: result.insights.iter().map(insight_view).collect(),
        doctor_questions: result.doctor_questions.clone(),
        disclaimer: DISCLAIMER,
    }
}

/// Select up to [`MAX_KEY_METRICS`] metrics for the gauge card row:
/// name contains one of the key test names (case-insensitive) and both
/// range bounds are present. Input order is preserved.
fn key_metric_cards(metrics: &[ExtractedMetric]) -> Vec<GaugeCard> {
    metrics
        .iter()
        .filter(|m| m.has_range() && is_key_metric(&m.test_name))
        .filter_map(gauge_card)
        .take(MAX_KEY_METRICS)
        .collect()
}

fn is_key_metric(test_name: &str) -> bool {
    let lowered = test_name.to_lowercase();
    KEY_METRIC_NAMES
        .iter()
        .any(|key| lowered.contains(&key.to_lowercase()))
}

fn gauge_card(metric: &ExtractedMetric) -> Option<GaugeCard> {
    let (min, max) = (metric.range_min?, metric.range_max?);
    let gauge = match GaugeGeometry::with_width(metric.value, min, max, CARD_GAUGE_WIDTH) {
        Ok(gauge) => gauge,
        Err(e) => {
            tracing::warn!(test_name = %metric.test_name, error = %e, "skipping gauge card");
            return None;
        }
    };
    Some(GaugeCard {
        test_name: metric.test_name.clone(),
        display_value: format_value(metric.value),
        unit: metric.unit.clone(),
        range_min: min,
        range_max: max,
        out_of_range: is_outside_range(metric.value, metric.range_min, metric.range_max),
        svg: gauge.to_svg(),
    })
}

fn category_views(metrics: &[ExtractedMetric]) -> Vec<CategoryView> {
    group_by_category(metrics)
        .into_iter()
        .map(|group| CategoryView {
            name: group.name.to_string(),
            test_count: group.metrics.len(),
            rows: group.metrics.iter().map(|m| metric_row(m)).collect(),
        })
        .collect()
}

fn metric_row(metric: &ExtractedMetric) -> MetricRow {
    let reference_range = match (metric.range_min, metric.range_max) {
        (Some(min), Some(max)) => Some(format!(
            "{} - {}",
            format_value(min),
            format_value(max)
        )),
        _ => None,
    };

    let gauge_svg = match (metric.range_min, metric.range_max) {
        (Some(min), Some(max)) => match GaugeGeometry::compute(metric.value, min, max) {
            Ok(gauge) => Some(gauge.to_svg()),
            Err(e) => {
                tracing::warn!(test_name = %metric.test_name, error = %e, "falling back to status badge");
                None
            }
        },
        _ => None,
    };

    MetricRow {
        test_name: metric.test_name.clone(),
        display_value: format_value(metric.value),
        unit: metric.unit.clone(),
        reference_range,
        status: metric.status,
        tier: status_tier(metric.status),
        out_of_range: is_outside_range(metric.value, metric.range_min, metric.range_max),
        gauge_svg,
    }
}

fn insight_view(insight: &crate::models::ReasoningInsight) -> InsightView {
    let icon = match insight.severity {
        InsightSeverity::Alert | InsightSeverity::Warning => InsightIcon::Warning,
        _ => InsightIcon::Check,
    };
    InsightView {
        title: insight.title.clone(),
        description: insight.description.clone(),
        related_metrics: insight.related_metrics.clone(),
        severity: insight.severity,
        icon,
    }
}

/// Raw value formatting: integers without the trailing ".0".
fn format_value(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
