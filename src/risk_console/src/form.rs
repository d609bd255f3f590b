use std::io::{BufRead, Write};

use credit_risk_engine::{FieldSpec, LoanFeatures, FEATURE_COUNT, FORM_FIELDS};

/// Read one line; `None` at end of input. Invalid UTF-8 is replaced so the
/// answer fails to parse and the field is asked again.
pub fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Ask for one field until the answer is valid. An empty answer keeps `current`.
fn ask(
    spec: &FieldSpec,
    current: u64,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<u64>> {
    loop {
        write!(out, "{} (min {}, step {}) [{}]: ", spec.label, spec.min, spec.step, current)?;
        out.flush()?;
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(current));
        }
        match spec.parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                log::debug!("rejected input: {err}");
                writeln!(out, "  {err}")?;
            }
        }
    }
}

/// Walk the eight fields, starting from `previous`. `None` if input ends.
pub fn fill(
    previous: &LoanFeatures,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<LoanFeatures>> {
    let mut values = [0u64; FEATURE_COUNT];
    for ((slot, spec), current) in values.iter_mut().zip(&FORM_FIELDS).zip(previous.form_values()) {
        match ask(spec, current, input, out)? {
            Some(value) => *slot = value,
            None => return Ok(None),
        }
    }
    Ok(Some(LoanFeatures::from_form(values)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_answers_keep_defaults() {
        let mut input = Cursor::new("\n\n\n1_000_000\n12\n\n\n\n");
        let mut out = Vec::new();
        let features = fill(&LoanFeatures::default(), &mut input, &mut out).unwrap().unwrap();
        assert_eq!(
            features,
            LoanFeatures {
                disbursed_amount: 1_000_000,
                term: 12,
                ..LoanFeatures::default()
            }
        );
        let prompts = String::from_utf8(out).unwrap();
        assert!(prompts.contains("Term (Lama Pinjaman) (min 1, step 1) [1]: "));
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        // Term: 0 then "abc" are rejected before 6 is accepted.
        let mut input = Cursor::new("\n\n\n\n0\nabc\n6\n\n\n-3\n4\n");
        let mut out = Vec::new();
        let features = fill(&LoanFeatures::default(), &mut input, &mut out).unwrap().unwrap();
        assert_eq!(features.term, 6);
        assert_eq!(features.no_of_arrear_days, 4);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Term: 0 is below the minimum of 1"));
        assert!(transcript.contains("Term: 'abc' is not a whole number"));
        assert!(transcript.contains("NoOfArrearDays: -3 is below the minimum of 0"));
    }

    #[test]
    fn non_utf8_answer_is_asked_again() {
        let mut input = Cursor::new(b"\xff\xfe\n\n\n\n\n\n\n\n\n".to_vec());
        let mut out = Vec::new();
        let features = fill(&LoanFeatures::default(), &mut input, &mut out).unwrap().unwrap();
        assert_eq!(features, LoanFeatures::default());
        assert!(String::from_utf8(out).unwrap().contains("is not a whole number"));
    }

    #[test]
    fn previous_values_are_offered_again() {
        let previous = LoanFeatures {
            od_interest: 250_000,
            term: 24,
            ..LoanFeatures::default()
        };
        let mut input = Cursor::new("\n".repeat(FEATURE_COUNT));
        let mut out = Vec::new();
        let features = fill(&previous, &mut input, &mut out).unwrap().unwrap();
        assert_eq!(features, previous);
        assert!(String::from_utf8(out).unwrap().contains("[250000]"));
    }

    #[test]
    fn end_of_input_stops_the_form() {
        let mut input = Cursor::new("100\n200\n");
        let mut out = Vec::new();
        assert!(fill(&LoanFeatures::default(), &mut input, &mut out).unwrap().is_none());
    }
}
