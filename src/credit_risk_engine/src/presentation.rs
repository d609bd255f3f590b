use serde::Serialize;

use crate::series::{SeriesPoint, MAX_SCORE};
use crate::types::RiskLabel;

pub const PAGE_TITLE: &str = "Prediksi Risiko Kredit PNM";
pub const APP_TITLE: &str = "📊 Prediksi Risiko Kredit Nasabah - PNM";
pub const INTRO: &str = "Masukkan data pinjaman nasabah untuk melihat tingkat risiko kredit. \
     Prediksi ini bisa membantu pengambilan keputusan berdasarkan karakteristik pinjaman mereka.";
pub const FORM_HEADER: &str = "📥 Input Data Nasabah";
pub const PREDICT_ACTION: &str = "🔍 Prediksi Risiko";
pub const INSIGHT_HEADER: &str = "📈 Insight Risiko Kredit";
pub const UNINTERPRETABLE: &str = "Prediksi tidak dapat diinterpretasikan";

/// Static description of the arrears simulation chart.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_min: u32,
    pub y_max: u32,
    pub markers: bool,
}

pub const ARREARS_CHART: ChartSpec = ChartSpec {
    title: "📊 Simulasi Dampak Hari Menunggak terhadap Risiko",
    x_label: "Hari Tunggakan",
    y_label: "Skor Risiko (%)",
    y_min: 0,
    y_max: MAX_SCORE,
    markers: true,
};

/// Everything shown for one successful prediction.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub label: RiskLabel,
    pub advisory: &'static str,
    pub series: Vec<SeriesPoint>,
}

impl Prediction {
    pub fn headline(&self) -> String {
        format!("🧾 Hasil Prediksi: {} Risiko Kredit", self.label)
    }
}
