use candid::{CandidType, Nat};
use serde::{Deserialize, Serialize};

/// Install / upgrade argument: contents of the two model artifacts.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug)]
pub struct ModelArtifacts {
    pub classifier_json: String,
    pub label_encoder_json: String,
}

/// Loan form as submitted by the frontend. Amounts in whole rupiah.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug)]
pub struct LoanApplication {
    pub outstanding_principal: Nat,
    pub od_principal: Nat,
    pub od_interest: Nat,
    pub disbursed_amount: Nat,
    pub term: Nat,
    pub principal_due: Nat,
    pub interest_due: Nat,
    pub no_of_arrear_days: Nat,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub column: String,
    pub label: String,
    pub min: u64,
    pub step: u64,
    pub currency: bool,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChartPoint {
    pub days_overdue: u32,
    pub risk_score: u32,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChartView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_min: u32,
    pub y_max: u32,
    pub markers: bool,
    pub points: Vec<ChartPoint>,
}

/// Result section for one Predict action.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PredictionView {
    pub label: String,
    pub headline: String,
    pub insight_header: String,
    pub advisory: String,
    pub chart: ChartView,
}
