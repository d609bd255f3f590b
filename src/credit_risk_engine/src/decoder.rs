use serde::{Deserialize, Serialize};

use crate::error::{LoadError, PredictError};
use crate::types::{RawLabelId, RiskLabel};

const ARTIFACT: &str = "label encoder";

/// Maps raw classifier ids back to category names: id `i` is `classes[i]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Result<Self, LoadError> {
        if classes.is_empty() {
            return Err(LoadError::invalid(ARTIFACT, "no classes"));
        }
        Ok(LabelDecoder { classes })
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let decoder: LabelDecoder =
            serde_json::from_str(json).map_err(|source| LoadError::Parse {
                artifact: ARTIFACT,
                source,
            })?;
        Self::new(decoder.classes)
    }

    pub fn decode(&self, id: RawLabelId) -> Result<RiskLabel, PredictError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(RiskLabel::new)
            .ok_or(PredictError::UnknownLabelId {
                id,
                known: self.classes.len(),
            })
    }

    /// Every label this decoder can produce.
    pub fn labels(&self) -> impl Iterator<Item = RiskLabel> + '_ {
        self.classes.iter().map(RiskLabel::new)
    }
}
