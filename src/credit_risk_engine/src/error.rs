use std::path::PathBuf;
use thiserror::Error;

use crate::types::RawLabelId;

/// Failure to bring up the classifier or the label decoder. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {artifact} artifact: {source}")]
    Parse {
        artifact: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {artifact} artifact: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },
}

impl LoadError {
    pub(crate) fn invalid(artifact: &'static str, reason: impl Into<String>) -> Self {
        LoadError::Invalid {
            artifact,
            reason: reason.into(),
        }
    }
}

/// A form value that does not satisfy its field's constraints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field}: '{value}' is not a whole number")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field}: {value} is below the minimum of {min}")]
    BelowMinimum {
        field: &'static str,
        value: i128,
        min: u64,
    },

    #[error("{field}: {value} is above the maximum of {max}")]
    AboveMaximum {
        field: &'static str,
        value: i128,
        max: u64,
    },
}

/// Per-request failure after the form has been submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("prediction could not be interpreted: label id {id} is not known to the label encoder ({known} classes)")]
    UnknownLabelId { id: RawLabelId, known: usize },
}
