use credit_risk_engine::loader::{load_classifier, load_label_decoder};
use credit_risk_engine::{Classifier, LoadError, RiskEngine, FEATURE_COLUMNS};

const SHIPPED_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../artifacts/model_risiko.json");
const SHIPPED_ENCODER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../artifacts/label_encoder.json");

#[test]
fn shipped_artifacts_load() {
    let model = load_classifier(SHIPPED_MODEL).expect("model");
    assert_eq!(model.feature_names, FEATURE_COLUMNS.to_vec());
    assert_eq!(model.name(), "pnm_credit_risk_tree_v1");

    let decoder = load_label_decoder(SHIPPED_ENCODER).expect("encoder");
    let labels: Vec<String> = decoder.labels().map(|l| l.to_string()).collect();
    assert_eq!(labels, vec!["Rendah", "Sedang", "Tinggi"]);
}

#[test]
fn load_model_from_json_file() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let model_path = tmp.path().join("model.json");
    let encoder_path = tmp.path().join("encoder.json");
    std::fs::write(
        &model_path,
        serde_json::json!({
            "model_name": "stump",
            "feature_names": FEATURE_COLUMNS,
            "classes": [1],
            "estimator": {
                "type": "decision_tree",
                "children_left": [-1], "children_right": [-1], "feature": [-2],
                "threshold": [-2.0], "value": [[4.0]]
            }
        })
        .to_string(),
    )
    .expect("write");
    std::fs::write(&encoder_path, r#"{"classes":["Rendah","Sedang"]}"#).expect("write");

    let engine = RiskEngine::load(&model_path, &encoder_path).expect("load");
    assert_eq!(engine.model_name(), "stump");
}

#[test]
fn missing_artifact_is_an_io_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let missing = tmp.path().join("model_risiko.json");
    match RiskEngine::load(&missing, SHIPPED_ENCODER) {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("loaded a missing artifact"),
    }
}

#[test]
fn corrupt_encoder_is_a_parse_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("label_encoder.json");
    std::fs::write(&path, "classes: Rendah, Sedang, Tinggi").expect("write");
    let err = load_label_decoder(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "{err}");
}
