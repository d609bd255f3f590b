use serde::{Deserialize, Serialize};

use crate::types::RiskLabel;

pub const SERIES_LEN: usize = 13;
pub const DAYS_STEP: u32 = 5;
pub const MAX_SCORE: u32 = 100;
/// Added to every point when the predicted label is high risk.
pub const HIGH_RISK_BONUS: u32 = 10;

/// One point of the arrears simulation chart.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesPoint {
    pub days_overdue: u32,
    pub risk_score: u32,
}

/// Simulated risk score against days overdue, 0 to 60 in steps of 5.
///
/// The curve depends only on the predicted label, never on the borrower's
/// actual `NoOfArrearDays`.
pub fn arrears_simulation(label: &RiskLabel) -> Vec<SeriesPoint> {
    let bonus = if label.is_high() { HIGH_RISK_BONUS } else { 0 };
    (0..SERIES_LEN as u32)
        .map(|i| SeriesPoint {
            days_overdue: i * DAYS_STEP,
            risk_score: (i * 2 + bonus).min(MAX_SCORE),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn low_risk_curve() {
        let series = arrears_simulation(&RiskLabel::new("Rendah"));
        assert_eq!(series.len(), 13);
        assert_eq!(series[0], SeriesPoint { days_overdue: 0, risk_score: 0 });
        assert_eq!(series[12], SeriesPoint { days_overdue: 60, risk_score: 24 });
    }

    #[test]
    fn high_risk_curve_is_shifted() {
        let scores: Vec<u32> = arrears_simulation(&RiskLabel::new("Tinggi"))
            .iter()
            .map(|p| p.risk_score)
            .collect();
        assert_eq!(scores, vec![10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34]);
    }
}
