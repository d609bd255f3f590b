//! Input form schema and the only path from raw user input to
//! [`LoanFeatures`].

use serde::Serialize;

use crate::error::InputError;
use crate::types::{LoanFeatures, FEATURE_COLUMNS, FEATURE_COUNT};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Whole rupiah.
    Currency,
    /// Months or days.
    Count,
}

/// One numeric field of the loan form.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Artifact column this field feeds.
    pub column: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub min: u64,
    /// Widget increment.
    pub step: u64,
}

impl FieldSpec {
    const fn currency(column: &'static str, label: &'static str) -> Self {
        FieldSpec {
            column,
            label,
            kind: FieldKind::Currency,
            min: 0,
            step: 100_000,
        }
    }

    const fn count(column: &'static str, label: &'static str, min: u64) -> Self {
        FieldSpec {
            column,
            label,
            kind: FieldKind::Count,
            min,
            step: 1,
        }
    }

    pub fn max(&self) -> u64 {
        match self.kind {
            FieldKind::Currency => u64::MAX,
            FieldKind::Count => u64::from(u32::MAX),
        }
    }

    /// Check a submitted value against this field's range.
    pub fn check(&self, value: i128) -> Result<u64, InputError> {
        if value < i128::from(self.min) {
            return Err(InputError::BelowMinimum {
                field: self.column,
                value,
                min: self.min,
            });
        }
        if value > i128::from(self.max()) {
            return Err(InputError::AboveMaximum {
                field: self.column,
                value,
                max: self.max(),
            });
        }
        Ok(value as u64)
    }

    /// Parse typed text; `_` may be used as a digit separator.
    pub fn parse(&self, text: &str) -> Result<u64, InputError> {
        let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();
        let value = cleaned
            .parse::<i128>()
            .map_err(|_| InputError::NotAnInteger {
                field: self.column,
                value: text.trim().to_string(),
            })?;
        self.check(value)
    }
}

/// The eight form fields in column order.
pub const FORM_FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec::currency(FEATURE_COLUMNS[0], "OutStanding Principal (Rp)"),
    FieldSpec::currency(FEATURE_COLUMNS[1], "OD Principal (Rp)"),
    FieldSpec::currency(FEATURE_COLUMNS[2], "OD Interest (Rp)"),
    FieldSpec::currency(FEATURE_COLUMNS[3], "Disbursed Amount (Rp)"),
    FieldSpec::count(FEATURE_COLUMNS[4], "Term (Lama Pinjaman)", 1),
    FieldSpec::currency(FEATURE_COLUMNS[5], "Principal Due (Rp)"),
    FieldSpec::currency(FEATURE_COLUMNS[6], "Interest Due (Rp)"),
    FieldSpec::count(FEATURE_COLUMNS[7], "Jumlah Hari Menunggak (NoOfArrearDays)", 0),
];

impl LoanFeatures {
    /// Build from form values given in column order.
    pub fn from_form(values: [u64; FEATURE_COUNT]) -> Result<Self, InputError> {
        let mut checked = [0u64; FEATURE_COUNT];
        for ((slot, spec), value) in checked.iter_mut().zip(&FORM_FIELDS).zip(values) {
            *slot = spec.check(i128::from(value))?;
        }
        // Count fields were bounded to u32 by `check`.
        Ok(LoanFeatures {
            outstanding_principal: checked[0],
            od_principal: checked[1],
            od_interest: checked[2],
            disbursed_amount: checked[3],
            term: checked[4] as u32,
            principal_due: checked[5],
            interest_due: checked[6],
            no_of_arrear_days: checked[7] as u32,
        })
    }

    /// Form values in column order; inverse of [`LoanFeatures::from_form`].
    pub fn form_values(&self) -> [u64; FEATURE_COUNT] {
        [
            self.outstanding_principal,
            self.od_principal,
            self.od_interest,
            self.disbursed_amount,
            u64::from(self.term),
            self.principal_due,
            self.interest_due,
            u64::from(self.no_of_arrear_days),
        ]
    }
}
