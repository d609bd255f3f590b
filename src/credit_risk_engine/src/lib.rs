//! Credit-risk prediction for a single loan borrower.
//!
//! Load the classifier and label encoder once with [`RiskEngine::load`],
//! build [`LoanFeatures`] through the form schema in [`form`], then call
//! [`handle_predict`] per Predict action.

pub mod advisory;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod form;
pub mod loader;
pub mod model;
pub mod presentation;
pub mod series;
pub mod types;

pub use decoder::LabelDecoder;
pub use engine::{handle_predict, RiskEngine};
pub use error::{InputError, LoadError, PredictError};
pub use form::{FieldKind, FieldSpec, FORM_FIELDS};
pub use model::{Classifier, ClassifierArtifact};
pub use presentation::{ChartSpec, Prediction, ARREARS_CHART};
pub use series::{arrears_simulation, SeriesPoint};
pub use types::{LoanFeatures, RawLabelId, RiskLabel, FEATURE_COLUMNS, FEATURE_COUNT};
