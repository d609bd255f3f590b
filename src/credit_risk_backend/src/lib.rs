// src/credit_risk_backend/lib.rs
use ic_cdk_macros::{init, post_upgrade, query, update};
mod types;
use types::{ChartPoint, ChartView, FormField, LoanApplication, ModelArtifacts, PredictionView};

use candid::Nat;
use credit_risk_engine::presentation::{INSIGHT_HEADER, UNINTERPRETABLE};
use credit_risk_engine::{
    handle_predict, FieldKind, InputError, LoanFeatures, PredictError, Prediction, RiskEngine,
    ARREARS_CHART, FEATURE_COUNT, FORM_FIELDS,
};
use num_traits::cast::ToPrimitive;
use once_cell::sync::OnceCell;

/// Classifier and label encoder, set once from the install argument.
static ENGINE: OnceCell<RiskEngine> = OnceCell::new();

fn install(artifacts: ModelArtifacts) {
    let engine =
        match RiskEngine::from_json(&artifacts.classifier_json, &artifacts.label_encoder_json) {
            Ok(engine) => engine,
            Err(err) => ic_cdk::trap(&format!("cannot load model artifacts: {err}")),
        };
    ic_cdk::println!(
        "Credit risk backend initialized with model '{}'",
        engine.model_name()
    );
    if ENGINE.set(engine).is_err() {
        ic_cdk::trap("model artifacts already loaded");
    }
}

#[init]
fn init(artifacts: ModelArtifacts) {
    install(artifacts);
}

/// Heap state does not survive an upgrade; the artifacts are passed again.
#[post_upgrade]
fn post_upgrade(artifacts: ModelArtifacts) {
    install(artifacts);
}

/// Map the submitted form onto the feature record, enforcing field ranges.
fn to_features(app: &LoanApplication) -> Result<LoanFeatures, InputError> {
    let submitted: [&Nat; FEATURE_COUNT] = [
        &app.outstanding_principal,
        &app.od_principal,
        &app.od_interest,
        &app.disbursed_amount,
        &app.term,
        &app.principal_due,
        &app.interest_due,
        &app.no_of_arrear_days,
    ];
    let mut values = [0u64; FEATURE_COUNT];
    for ((slot, spec), nat) in values.iter_mut().zip(&FORM_FIELDS).zip(submitted) {
        *slot = nat.0.to_u64().ok_or_else(|| InputError::AboveMaximum {
            field: spec.column,
            value: nat.0.to_i128().unwrap_or(i128::MAX),
            max: spec.max(),
        })?;
    }
    // Field ranges are checked once, here.
    LoanFeatures::from_form(values)
}

fn render(prediction: &Prediction) -> PredictionView {
    PredictionView {
        label: prediction.label.to_string(),
        headline: prediction.headline(),
        insight_header: INSIGHT_HEADER.to_string(),
        advisory: prediction.advisory.to_string(),
        chart: ChartView {
            title: ARREARS_CHART.title.to_string(),
            x_label: ARREARS_CHART.x_label.to_string(),
            y_label: ARREARS_CHART.y_label.to_string(),
            y_min: ARREARS_CHART.y_min,
            y_max: ARREARS_CHART.y_max,
            markers: ARREARS_CHART.markers,
            points: prediction
                .series
                .iter()
                .map(|p| ChartPoint {
                    days_overdue: p.days_overdue,
                    risk_score: p.risk_score,
                })
                .collect(),
        },
    }
}

/// Candid result for one prediction; undecodable labels become an error text.
fn outcome(result: Result<Prediction, PredictError>) -> Result<PredictionView, String> {
    result
        .map(|prediction| render(&prediction))
        .map_err(|err| format!("{UNINTERPRETABLE}: {err}"))
}

fn field_views() -> Vec<FormField> {
    FORM_FIELDS
        .iter()
        .map(|f| FormField {
            column: f.column.to_string(),
            label: f.label.to_string(),
            min: f.min,
            step: f.step,
            currency: f.kind == FieldKind::Currency,
        })
        .collect()
}

/// Run one prediction for the submitted loan form
#[update]
fn predict(application: LoanApplication) -> Result<PredictionView, String> {
    let engine = ENGINE
        .get()
        .ok_or_else(|| "model artifacts not loaded".to_string())?;
    let features = to_features(&application).map_err(|err| err.to_string())?;
    ic_cdk::println!("Features: {:?}", features.to_vector());

    let result = handle_predict(engine, &features);
    if let Err(err) = &result {
        ic_cdk::println!("Prediction failed: {}", err);
    }
    outcome(result)
}

/// Form schema for the frontend: labels, minimums and steps in column order
#[query]
fn form_fields() -> Vec<FormField> {
    field_views()
}

#[query]
fn version() -> String {
    "credit_risk_backend v0.1.0".to_string()
}
