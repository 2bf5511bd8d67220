//! Bias reference records.

use serde::{Deserialize, Serialize};

/// Header row of the reference dataset, in column order.
pub const DATASET_HEADER: [&str; 3] = ["Bias_Type", "Detection_Method", "Mitigation_Strategy"];

/// One row of the bias reference table.
///
/// Field names serialize to the dataset's column names so the same type
/// reads from CSV and writes to the `/check` JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasRecord {
    /// Human-readable label, unique within the table.
    #[serde(rename = "Bias_Type")]
    pub bias_type: String,
    /// How the bias is detected.
    #[serde(rename = "Detection_Method")]
    pub detection_method: String,
    /// How the bias is reduced.
    #[serde(rename = "Mitigation_Strategy")]
    pub mitigation_strategy: String,
}

impl BiasRecord {
    pub fn new(
        bias_type: impl Into<String>,
        detection_method: impl Into<String>,
        mitigation_strategy: impl Into<String>,
    ) -> Self {
        Self {
            bias_type: bias_type.into(),
            detection_method: detection_method.into(),
            mitigation_strategy: mitigation_strategy.into(),
        }
    }

    /// Placeholder returned when a query matches nothing.
    pub fn not_found() -> Self {
        Self::new("Not found", "N/A", "Try another keyword")
    }

    /// Check whether this is the "not found" placeholder.
    pub fn is_not_found(&self) -> bool {
        *self == Self::not_found()
    }

    /// Case-insensitive substring test against the bias type.
    ///
    /// `folded_query` must already be lowercased.
    pub fn matches_folded(&self, folded_query: &str) -> bool {
        self.bias_type.to_lowercase().contains(folded_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_dataset_column_names() {
        let record = BiasRecord::new("Age Bias", "calibration", "reweighting");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["Bias_Type"], "Age Bias");
        assert_eq!(json["Detection_Method"], "calibration");
        assert_eq!(json["Mitigation_Strategy"], "reweighting");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_not_found_placeholder() {
        let sentinel = BiasRecord::not_found();
        assert_eq!(sentinel.bias_type, "Not found");
        assert_eq!(sentinel.detection_method, "N/A");
        assert_eq!(sentinel.mitigation_strategy, "Try another keyword");
        assert!(sentinel.is_not_found());
        assert!(!BiasRecord::new("Label Bias", "x", "y").is_not_found());
    }

    #[test]
    fn test_matches_folded_is_case_insensitive() {
        let record = BiasRecord::new("Gender Bias", "x", "y");
        assert!(record.matches_folded("gender"));
        assert!(record.matches_folded("der bi"));
        assert!(record.matches_folded(""));
        assert!(!record.matches_folded("racial"));
    }
}
