use std::path::Path;

use crate::advisory;
use crate::decoder::LabelDecoder;
use crate::error::{LoadError, PredictError};
use crate::loader;
use crate::model::{Classifier, ClassifierArtifact};
use crate::presentation::Prediction;
use crate::series;
use crate::types::{LoanFeatures, RiskLabel};

/// Loaded classifier and label decoder. Built once, then only borrowed.
pub struct RiskEngine {
    classifier: Box<dyn Classifier>,
    decoder: LabelDecoder,
}

impl RiskEngine {
    pub fn new(classifier: impl Classifier + 'static, decoder: LabelDecoder) -> Self {
        for label in decoder.labels() {
            if advisory::lookup(&label).is_none() {
                log::warn!("label encoder class '{label}' has no advisory text");
            }
        }
        RiskEngine {
            classifier: Box::new(classifier),
            decoder,
        }
    }

    /// Load both artifacts from disk.
    pub fn load(
        classifier_path: impl AsRef<Path>,
        label_encoder_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let classifier = loader::load_classifier(classifier_path)?;
        let decoder = loader::load_label_decoder(label_encoder_path)?;
        Ok(Self::new(classifier, decoder))
    }

    /// Build from artifact contents already in memory.
    pub fn from_json(classifier_json: &str, label_encoder_json: &str) -> Result<Self, LoadError> {
        let classifier = ClassifierArtifact::from_json(classifier_json)?;
        let decoder = LabelDecoder::from_json(label_encoder_json)?;
        Ok(Self::new(classifier, decoder))
    }

    pub fn model_name(&self) -> &str {
        self.classifier.name()
    }

    /// Predict and decode the risk label for one borrower.
    pub fn classify(&self, features: &LoanFeatures) -> Result<RiskLabel, PredictError> {
        let raw = self.classifier.predict(&features.to_vector());
        if log::log_enabled!(log::Level::Debug) {
            let columns: Vec<String> = features
                .columns()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            log::debug!("{} -> raw label id {raw}", columns.join(" "));
        }
        self.decoder.decode(raw).map_err(|err| {
            log::warn!("{err}");
            err
        })
    }
}

/// One Predict action: classify, then attach the advisory and the chart series.
pub fn handle_predict(
    engine: &RiskEngine,
    features: &LoanFeatures,
) -> Result<Prediction, PredictError> {
    let label = engine.classify(features)?;
    Ok(Prediction {
        advisory: advisory::advisory_for(&label),
        series: series::arrears_simulation(&label),
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawLabelId, FEATURE_COUNT};

    struct Fixed(RawLabelId);

    impl Classifier for Fixed {
        fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> RawLabelId {
            self.0
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn engine(id: RawLabelId, classes: &[&str]) -> RiskEngine {
        let decoder = LabelDecoder::new(classes.iter().map(|c| c.to_string()).collect()).unwrap();
        RiskEngine::new(Fixed(id), decoder)
    }

    #[test]
    fn high_label_gets_high_advisory_and_bonus() {
        let e = engine(2, &["Rendah", "Sedang", "Tinggi"]);
        let prediction = handle_predict(&e, &LoanFeatures::default()).unwrap();
        assert_eq!(prediction.label.as_str(), "Tinggi");
        assert_eq!(prediction.advisory, advisory::advisory_for(&RiskLabel::new("Tinggi")));
        assert_eq!(prediction.series[0].risk_score, 10);
        assert_eq!(prediction.headline(), "🧾 Hasil Prediksi: Tinggi Risiko Kredit");
    }

    #[test]
    fn unknown_raw_id_is_surfaced() {
        let e = engine(7, &["Rendah", "Sedang", "Tinggi"]);
        let err = handle_predict(&e, &LoanFeatures::default()).unwrap_err();
        assert_eq!(err, PredictError::UnknownLabelId { id: 7, known: 3 });
    }

    #[test]
    fn label_without_advisory_uses_fallback() {
        let e = engine(0, &["Sangat Tinggi"]);
        let prediction = handle_predict(&e, &LoanFeatures::default()).unwrap();
        assert_eq!(prediction.advisory, advisory::FALLBACK_ADVISORY);
        assert_eq!(prediction.series[0].risk_score, 0);
    }
}
