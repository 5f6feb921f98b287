use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Macro to generate a wire-string enum with as_str + infallible parse.
///
/// The analysis payload comes from a generative model, so parsing never
/// fails: any string outside the declared set maps to the `$fallback`
/// variant. Serde impls go through the same pair of functions.
macro_rules! wire_enum {
    ($name:ident, $fallback:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn parse(s: &str) -> Self {
                match s {
                    $($s => Self::$variant),+,
                    _ => Self::$fallback,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::parse(&s))
            }
        }
    };
}

wire_enum!(TestStatus, Unknown {
    Normal => "Normal",
    Low => "Low",
    High => "High",
    CriticalLow => "Critical Low",
    CriticalHigh => "Critical High",
    Unknown => "Unknown",
});

wire_enum!(InsightSeverity, Info {
    Info => "info",
    Warning => "warning",
    Alert => "alert",
});

impl Default for TestStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Default for InsightSeverity {
    fn default() -> Self {
        Self::Info
    }
}

/// Display emphasis tier derived from a metric's status.
///
/// Drives color and iconography in the dashboard. Every status maps to
/// exactly one tier; see `render::status::status_tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Positive,
    Warning,
    Alert,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for (variant, s) in [
            (TestStatus::Normal, "Normal"),
            (TestStatus::Low, "Low"),
            (TestStatus::High, "High"),
            (TestStatus::CriticalLow, "Critical Low"),
            (TestStatus::CriticalHigh, "Critical High"),
            (TestStatus::Unknown, "Unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TestStatus::parse(s), variant);
        }
    }

    #[test]
    fn unrecognized_status_falls_back_to_unknown() {
        assert_eq!(TestStatus::parse("Borderline"), TestStatus::Unknown);
        assert_eq!(TestStatus::parse(""), TestStatus::Unknown);
        assert_eq!(TestStatus::parse("normal"), TestStatus::Unknown);
    }

    #[test]
    fn status_deserializes_from_wire_string() {
        let status: TestStatus = serde_json::from_str(r#""Critical Low""#).unwrap();
        assert_eq!(status, TestStatus::CriticalLow);

        let status: TestStatus = serde_json::from_str(r#""Inconclusive""#).unwrap();
        assert_eq!(status, TestStatus::Unknown);
    }

    #[test]
    fn status_serializes_to_wire_string() {
        let json = serde_json::to_string(&TestStatus::CriticalHigh).unwrap();
        assert_eq!(json, r#""Critical High""#);
    }

    #[test]
    fn severity_round_trip() {
        for (variant, s) in [
            (InsightSeverity::Info, "info"),
            (InsightSeverity::Warning, "warning"),
            (InsightSeverity::Alert, "alert"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(InsightSeverity::parse(s), variant);
        }
    }

    #[test]
    fn unrecognized_severity_falls_back_to_info() {
        assert_eq!(InsightSeverity::parse("critical"), InsightSeverity::Info);
    }

    #[test]
    fn status_tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StatusTier::Positive).unwrap(),
            r#""positive""#
        );
        assert_eq!(
            serde_json::to_string(&StatusTier::Neutral).unwrap(),
            r#""neutral""#
        );
    }
}
