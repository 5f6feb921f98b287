//! Declared output schema for the extraction call.
//!
//! Constrains the model's JSON to the `AnalysisResult` shape: range
//! bounds nullable, `status` limited to the six label strings,
//! `severity` limited to info/warning/alert.

use serde_json::{json, Value};

/// Response schema sent with every extraction request.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "metrics": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "testName": { "type": "STRING" },
                        "value": {
                            "type": "NUMBER",
                            "description": "The numerical value measured"
                        },
                        "unit": { "type": "STRING" },
                        "rangeMin": { "type": "NUMBER", "nullable": true },
                        "rangeMax": { "type": "NUMBER", "nullable": true },
                        "status": {
                            "type": "STRING",
                            "enum": [
                                "Normal",
                                "Low",
                                "High",
                                "Critical Low",
                                "Critical High",
                                "Unknown"
                            ]
                        },
                        "category": { "type": "STRING" }
                    },
                    "required": ["testName", "value", "unit", "status", "category"]
                }
            },
            "summary": { "type": "STRING" },
            "insights": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "relatedMetrics": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "severity": {
                            "type": "STRING",
                            "enum": ["info", "warning", "alert"]
                        }
                    }
                }
            },
            "doctorQuestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_all_result_sections() {
        let schema = analysis_response_schema();
        let props = &schema["properties"];
        for key in ["metrics", "summary", "insights", "doctorQuestions"] {
            assert!(props.get(key).is_some(), "missing section {key}");
        }
    }

    #[test]
    fn status_enum_lists_all_six_labels() {
        let schema = analysis_response_schema();
        let labels = schema["properties"]["metrics"]["items"]["properties"]["status"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(labels.len(), 6);
        assert!(labels.contains(&json!("Critical Low")));
    }

    #[test]
    fn range_bounds_are_nullable_and_not_required() {
        let schema = analysis_response_schema();
        let metric = &schema["properties"]["metrics"]["items"];
        assert_eq!(metric["properties"]["rangeMin"]["nullable"], true);
        assert_eq!(metric["properties"]["rangeMax"]["nullable"], true);

        let required = metric["required"].as_array().unwrap();
        assert!(!required.contains(&json!("rangeMin")));
        assert!(!required.contains(&json!("rangeMax")));
    }

    #[test]
    fn severity_enum_is_constrained() {
        let schema = analysis_response_schema();
        let labels = schema["properties"]["insights"]["items"]["properties"]["severity"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(labels, &vec![json!("info"), json!("warning"), json!("alert")]);
    }
}
