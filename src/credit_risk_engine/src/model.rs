//! Classifier artifact and the estimators it can carry.
//!
//! The artifact is the JSON export of a fitted classifier: the columns it was
//! fitted on, the raw label ids it emits (`classes`), and the estimator
//! parameters. Everything is checked once in [`ClassifierArtifact::from_json`]
//! so that prediction itself cannot fail.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::types::{RawLabelId, FEATURE_COLUMNS, FEATURE_COUNT};

const ARTIFACT: &str = "classifier";

/// Inference over the fixed-order feature vector.
pub trait Classifier: Send + Sync {
    /// Raw label id for one feature vector. Deterministic.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> RawLabelId;

    /// Model name, for logs.
    fn name(&self) -> &str;
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassifierArtifact {
    pub model_name: String,
    pub feature_names: Vec<String>,
    pub classes: Vec<RawLabelId>,
    pub estimator: Estimator,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

/// Linear model with an optional standard scaler in front of it.
///
/// One coefficient row per class, or a single row for a two-class model
/// where the row scores class index 1.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LogisticRegression {
    #[serde(default)]
    pub means: Option<Vec<f64>>,
    #[serde(default)]
    pub stds: Option<Vec<f64>>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Fitted tree in parallel-array form. Node 0 is the root; a node is a leaf
/// when `children_left[node] == -1`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights, `classes.len()` entries each.
    pub value: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl ClassifierArtifact {
    /// Parse and validate a classifier artifact.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let artifact: ClassifierArtifact =
            serde_json::from_str(json).map_err(|source| LoadError::Parse {
                artifact: ARTIFACT,
                source,
            })?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), LoadError> {
        if self.feature_names.len() != FEATURE_COUNT
            || self
                .feature_names
                .iter()
                .zip(FEATURE_COLUMNS)
                .any(|(got, want)| got != want)
        {
            return Err(LoadError::invalid(
                ARTIFACT,
                format!(
                    "fitted on columns {:?}, expected {:?}",
                    self.feature_names, FEATURE_COLUMNS
                ),
            ));
        }
        if self.classes.is_empty() {
            return Err(LoadError::invalid(ARTIFACT, "no classes"));
        }

        let n_classes = self.classes.len();
        match &self.estimator {
            Estimator::LogisticRegression(lr) => lr.validate(n_classes),
            Estimator::DecisionTree(tree) => tree.validate(n_classes),
            Estimator::RandomForest(forest) => {
                if forest.trees.is_empty() {
                    return Err(LoadError::invalid(ARTIFACT, "random forest has no trees"));
                }
                forest.trees.iter().try_for_each(|t| t.validate(n_classes))
            }
        }
    }

    /// Index into `classes` of the winning class.
    fn class_index(&self, x: &[f64; FEATURE_COUNT]) -> usize {
        match &self.estimator {
            Estimator::LogisticRegression(lr) => lr.class_index(x),
            Estimator::DecisionTree(tree) => argmax(tree.leaf(x)),
            Estimator::RandomForest(forest) => argmax(&forest.proba(x, self.classes.len())),
        }
    }
}

impl Classifier for ClassifierArtifact {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> RawLabelId {
        self.classes[self.class_index(features)]
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

impl LogisticRegression {
    fn validate(&self, n_classes: usize) -> Result<(), LoadError> {
        if n_classes < 2 {
            return Err(LoadError::invalid(
                ARTIFACT,
                format!("logistic regression needs at least 2 classes, got {n_classes}"),
            ));
        }
        let rows = self.coefficients.len();
        let binary = rows == 1 && n_classes == 2;
        if rows != n_classes && !binary {
            return Err(LoadError::invalid(
                ARTIFACT,
                format!("{rows} coefficient rows for {n_classes} classes"),
            ));
        }
        if self.intercepts.len() != rows {
            return Err(LoadError::invalid(
                ARTIFACT,
                format!("{} intercepts for {rows} coefficient rows", self.intercepts.len()),
            ));
        }
        if self.coefficients.iter().any(|row| row.len() != FEATURE_COUNT) {
            return Err(LoadError::invalid(
                ARTIFACT,
                format!("every coefficient row needs {FEATURE_COUNT} entries"),
            ));
        }
        match (&self.means, &self.stds) {
            (None, None) => Ok(()),
            (Some(m), Some(s)) if m.len() == FEATURE_COUNT && s.len() == FEATURE_COUNT => Ok(()),
            _ => Err(LoadError::invalid(
                ARTIFACT,
                format!("scaler needs both means and stds with {FEATURE_COUNT} entries"),
            )),
        }
    }

    /// Standardize feature: (x - mean) / std
    fn scale(&self, x: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let (means, stds) = match (&self.means, &self.stds) {
            (Some(m), Some(s)) => (m, s),
            _ => return *x,
        };
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            let std = if stds[i] == 0.0 { 1.0 } else { stds[i] };
            scaled[i] = (x[i] - means[i]) / std;
        }
        scaled
    }

    fn decision(&self, x: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let scaled = self.scale(x);
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| b + row.iter().zip(scaled).map(|(w, v)| w * v).sum::<f64>())
            .collect()
    }

    fn class_index(&self, x: &[f64; FEATURE_COUNT]) -> usize {
        let z = self.decision(x);
        if z.len() == 1 {
            let prob = 1.0 / (1.0 + (-z[0]).exp());
            usize::from(prob >= 0.5)
        } else {
            argmax(&z)
        }
    }
}

impl DecisionTree {
    fn validate(&self, n_classes: usize) -> Result<(), LoadError> {
        let n = self.children_left.len();
        if n == 0 {
            return Err(LoadError::invalid(ARTIFACT, "tree has no nodes"));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(LoadError::invalid(ARTIFACT, "tree arrays differ in length"));
        }
        for node in 0..n {
            if self.value[node].len() != n_classes {
                return Err(LoadError::invalid(
                    ARTIFACT,
                    format!("node {node} has {} class weights, expected {n_classes}", self.value[node].len()),
                ));
            }
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == -1 && right == -1 {
                continue;
            }
            // Children come after their parent; this also rules out cycles.
            let in_range = |child: i64| child > node as i64 && (child as usize) < n;
            if !in_range(left) || !in_range(right) {
                return Err(LoadError::invalid(
                    ARTIFACT,
                    format!("node {node} has invalid children ({left}, {right})"),
                ));
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= FEATURE_COUNT {
                return Err(LoadError::invalid(
                    ARTIFACT,
                    format!("node {node} splits on unknown feature {feature}"),
                ));
            }
        }
        Ok(())
    }

    /// Class weights of the leaf `x` falls into.
    fn leaf(&self, x: &[f64; FEATURE_COUNT]) -> &[f64] {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left < 0 {
                return &self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

impl RandomForest {
    /// Mean of the trees' normalized leaf weights.
    fn proba(&self, x: &[f64; FEATURE_COUNT], n_classes: usize) -> Vec<f64> {
        let mut total = vec![0.0; n_classes];
        for tree in &self.trees {
            let leaf = tree.leaf(x);
            let sum: f64 = leaf.iter().sum();
            for (acc, w) in total.iter_mut().zip(leaf) {
                *acc += if sum > 0.0 { w / sum } else { *w };
            }
        }
        let n_trees = self.trees.len() as f64;
        total.iter().map(|p| p / n_trees).collect()
    }
}

/// Index of the largest value; the first one wins on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
