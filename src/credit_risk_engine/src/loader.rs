use std::fs::read_to_string;
use std::path::Path;

use crate::decoder::LabelDecoder;
use crate::error::LoadError;
use crate::model::{Classifier, ClassifierArtifact};

/// Default location of the classifier artifact, relative to the working directory.
pub const CLASSIFIER_PATH: &str = "artifacts/model_risiko.json";
/// Default location of the label-encoder artifact.
pub const LABEL_ENCODER_PATH: &str = "artifacts/label_encoder.json";

fn read(path: &Path) -> Result<String, LoadError> {
    read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_classifier(path: impl AsRef<Path>) -> Result<ClassifierArtifact, LoadError> {
    let path = path.as_ref();
    let model = ClassifierArtifact::from_json(&read(path)?)?;
    log::info!(
        "loaded classifier '{}' from {} ({} classes)",
        model.name(),
        path.display(),
        model.classes.len()
    );
    Ok(model)
}

pub fn load_label_decoder(path: impl AsRef<Path>) -> Result<LabelDecoder, LoadError> {
    let path = path.as_ref();
    let decoder = LabelDecoder::from_json(&read(path)?)?;
    log::info!(
        "loaded label encoder from {} ({} labels)",
        path.display(),
        decoder.labels().count()
    );
    Ok(decoder)
}
