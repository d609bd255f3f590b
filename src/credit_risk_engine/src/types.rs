use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns the classifier is fitted on.
pub const FEATURE_COUNT: usize = 8;

/// Column names in the exact order the classifier expects them.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "OutStandingPrincipal",
    "ODPrincipal",
    "ODInterest",
    "DisbursedAmount",
    "Term",
    "PrincipalDue",
    "InterestDue",
    "NoOfArrearDays",
];

/// Label id as emitted by the classifier before decoding.
pub type RawLabelId = i64;

/// One borrower's loan attributes, built per prediction request.
///
/// Currency amounts are whole rupiah. `term` must be at least 1; the form
/// layer (`crate::form`) is the only place that builds this from user input
/// and enforces it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoanFeatures {
    #[serde(rename = "OutStandingPrincipal")]
    pub outstanding_principal: u64,
    #[serde(rename = "ODPrincipal")]
    pub od_principal: u64,
    #[serde(rename = "ODInterest")]
    pub od_interest: u64,
    #[serde(rename = "DisbursedAmount")]
    pub disbursed_amount: u64,
    #[serde(rename = "Term")]
    pub term: u32,
    #[serde(rename = "PrincipalDue")]
    pub principal_due: u64,
    #[serde(rename = "InterestDue")]
    pub interest_due: u64,
    #[serde(rename = "NoOfArrearDays")]
    pub no_of_arrear_days: u32,
}

impl Default for LoanFeatures {
    /// The form's starting values: every field at its minimum.
    fn default() -> Self {
        LoanFeatures {
            outstanding_principal: 0,
            od_principal: 0,
            od_interest: 0,
            disbursed_amount: 0,
            term: 1,
            principal_due: 0,
            interest_due: 0,
            no_of_arrear_days: 0,
        }
    }
}

impl LoanFeatures {
    /// Feature vector in `FEATURE_COLUMNS` order.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.outstanding_principal as f64,
            self.od_principal as f64,
            self.od_interest as f64,
            self.disbursed_amount as f64,
            f64::from(self.term),
            self.principal_due as f64,
            self.interest_due as f64,
            f64::from(self.no_of_arrear_days),
        ]
    }

    /// Column name / value pairs, for logging and display.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_COLUMNS.into_iter().zip(self.to_vector())
    }
}

/// Decoded credit-risk category.
///
/// The set of labels comes from the label-encoder artifact, so this is an
/// open string rather than an enum. `Rendah`, `Sedang` and `Tinggi` are the
/// categories the shipped encoder knows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RiskLabel(String);

impl RiskLabel {
    pub const LOW: &'static str = "Rendah";
    pub const MEDIUM: &'static str = "Sedang";
    pub const HIGH: &'static str = "Tinggi";

    pub fn new(label: impl Into<String>) -> Self {
        RiskLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_high(&self) -> bool {
        self.0 == Self::HIGH
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_follows_column_order() {
        let features = LoanFeatures {
            outstanding_principal: 1,
            od_principal: 2,
            od_interest: 3,
            disbursed_amount: 4,
            term: 5,
            principal_due: 6,
            interest_due: 7,
            no_of_arrear_days: 8,
        };
        assert_eq!(features.to_vector(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

        let names: Vec<&str> = features.columns().map(|(name, _)| name).collect();
        assert_eq!(names, FEATURE_COLUMNS.to_vec());
    }

    #[test]
    fn serializes_with_artifact_column_names() {
        let json = serde_json::to_value(LoanFeatures::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for column in FEATURE_COLUMNS {
            assert!(keys.contains(&column), "missing {column}");
        }
        assert_eq!(json["Term"], 1);
    }

    #[test]
    fn only_tinggi_is_high() {
        assert!(RiskLabel::new("Tinggi").is_high());
        assert!(!RiskLabel::new("Sedang").is_high());
        assert!(!RiskLabel::new("tinggi").is_high());
    }
}
