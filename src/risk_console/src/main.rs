//! Interactive terminal form for the credit risk model.
//!
//! Loads `artifacts/model_risiko.json` and `artifacts/label_encoder.json`
//! from the working directory, then asks for the eight loan fields and
//! shows the prediction each time Predict is chosen.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use credit_risk_engine::loader::{CLASSIFIER_PATH, LABEL_ENCODER_PATH};
use credit_risk_engine::presentation::PREDICT_ACTION;
use credit_risk_engine::{handle_predict, LoanFeatures, RiskEngine};
use env_logger::Builder;
use log::LevelFilter;

mod chart;
mod form;
mod render;

fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .init();
}

/// Form / Predict loop. Each Predict replaces the previously shown result.
fn run(engine: &RiskEngine, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let mut current = LoanFeatures::default();
    loop {
        render::form_header(out)?;
        let Some(features) = form::fill(&current, input, out)? else {
            break;
        };
        current = features;

        write!(out, "Enter = {PREDICT_ACTION}, q = keluar: ")?;
        out.flush()?;
        match form::read_line(input)? {
            Some(answer) if !answer.eq_ignore_ascii_case("q") => {}
            _ => break,
        }

        match handle_predict(engine, &current) {
            Ok(prediction) => render::prediction(out, &prediction)?,
            Err(err) => render::uninterpretable(out, &err)?,
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let engine = RiskEngine::load(CLASSIFIER_PATH, LABEL_ENCODER_PATH)
        .context("model artifacts could not be loaded")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    render::page_header(&mut out)?;
    run(&engine, &mut input, &mut out)
}
