//! Category grouping — flat metric list to ordered category groups.

use crate::models::ExtractedMetric;

/// Category assigned to metrics that arrive without one.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Metrics of one category, in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub metrics: Vec<&'a ExtractedMetric>,
}

/// Group metrics by category.
///
/// Groups appear in first-seen category order; within a group, metrics
/// keep their original order. A metric with an empty (or whitespace)
/// category lands in [`FALLBACK_CATEGORY`]. Every metric appears in
/// exactly one group.
pub fn group_by_category(metrics: &[ExtractedMetric]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

    for metric in metrics {
        let name = if metric.category.trim().is_empty() {
            FALLBACK_CATEGORY
        } else {
            metric.category.as_str()
        };

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.metrics.push(metric),
            None => groups.push(CategoryGroup {
                name,
                metrics: vec![metric],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestStatus;

    fn metric(name: &str, category: &str) -> ExtractedMetric {
        ExtractedMetric {
            test_name: name.to_string(),
            value: 1.0,
            unit: "x".to_string(),
            range_min: None,
            range_max: None,
            status: TestStatus::Normal,
            category: category.to_string(),
        }
    }

    #[test]
    fn groups_preserve_first_seen_category_order() {
        let metrics = vec![
            metric("Hemoglobin", "Hematology"),
            metric("Glucose", "Metabolic"),
            metric("Hematocrit", "Hematology"),
            metric("LDL", "Lipids"),
        ];

        let groups = group_by_category(&metrics);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Hematology", "Metabolic", "Lipids"]);
    }

    #[test]
    fn within_category_order_is_original() {
        let metrics = vec![
            metric("WBC", "Hematology"),
            metric("RBC", "Hematology"),
            metric("Platelets", "Hematology"),
        ];

        let groups = group_by_category(&metrics);
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0]
            .metrics
            .iter()
            .map(|m| m.test_name.as_str())
            .collect();
        assert_eq!(names, vec!["WBC", "RBC", "Platelets"]);
    }

    #[test]
    fn every_metric_appears_exactly_once() {
        let metrics = vec![
            metric("A", "One"),
            metric("B", ""),
            metric("C", "Two"),
            metric("D", "One"),
            metric("E", "   "),
        ];

        let groups = group_by_category(&metrics);
        let total: usize = groups.iter().map(|g| g.metrics.len()).sum();
        assert_eq!(total, metrics.len());

        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.metrics.iter().map(|m| m.test_name.as_str()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn missing_category_lands_in_other() {
        let metrics = vec![metric("Mystery", ""), metric("Blank", "  ")];
        let groups = group_by_category(&metrics);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, FALLBACK_CATEGORY);
        assert_eq!(groups[0].metrics.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }
}
