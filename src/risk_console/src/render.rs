use std::io::Write;

use credit_risk_engine::presentation::{
    APP_TITLE, FORM_HEADER, INSIGHT_HEADER, INTRO, PAGE_TITLE, UNINTERPRETABLE,
};
use credit_risk_engine::{Prediction, PredictError, ARREARS_CHART};

use crate::chart;

pub fn page_header(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{PAGE_TITLE}")?;
    writeln!(out, "{}", "=".repeat(PAGE_TITLE.chars().count()))?;
    writeln!(out, "{APP_TITLE}")?;
    writeln!(out, "{INTRO}")?;
    writeln!(out)
}

pub fn form_header(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{FORM_HEADER}")
}

pub fn prediction(out: &mut impl Write, prediction: &Prediction) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", prediction.headline())?;
    writeln!(out)?;
    writeln!(out, "{INSIGHT_HEADER}")?;
    writeln!(out, "{}", prediction.advisory)?;
    writeln!(out)?;
    for line in chart::line_chart(&ARREARS_CHART, &prediction.series) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

pub fn uninterpretable(out: &mut impl Write, err: &PredictError) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "⛔ {UNINTERPRETABLE}")?;
    writeln!(out, "   {err}")?;
    writeln!(out)
}
