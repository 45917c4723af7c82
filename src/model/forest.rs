//! Random Forest Classifier - native inference
//!
//! Evaluates a forest exported from scikit-learn's `RandomForestClassifier`.
//! Each tree is stored the way scikit-learn stores `tree_`: parallel arrays
//! indexed by node id, with `-1` children marking leaves.
//!
//! Prediction matches `RandomForestClassifier.predict`:
//! 1. Route the sample left while `x[feature] <= threshold`
//! 2. Normalize the reached leaf's class weights into probabilities
//! 3. Average probabilities over all trees
//! 4. Return `classes[argmax]` (first maximum wins)

use serde::Deserialize;

use super::artifacts::ArtifactError;
use super::quality::QualityModel;
use crate::features::layout::{validate_columns, Features, FEATURE_COUNT};

/// scikit-learn's `TREE_LEAF`
const TREE_LEAF: i64 = -1;

// ============================================================================
// ON-DISK FORMAT
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForestFile {
    n_features: usize,
    classes: Vec<i32>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    trees: Vec<TreeFile>,
}

#[derive(Debug, Deserialize)]
struct TreeFile {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    /// Per-node class weights (counts or fractions)
    value: Vec<Vec<f64>>,
}

// ============================================================================
// TREE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        proba: Vec<f64>,
    },
}

/// One validated decision tree
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn from_file(index: usize, file: TreeFile, n_classes: usize) -> Result<Self, ArtifactError> {
        let invalid = |msg: String| ArtifactError::Invalid(format!("tree {index}: {msg}"));

        let n_nodes = file.children_left.len();
        if n_nodes == 0 {
            return Err(invalid("tree has no nodes".to_string()));
        }
        if file.children_right.len() != n_nodes
            || file.feature.len() != n_nodes
            || file.threshold.len() != n_nodes
            || file.value.len() != n_nodes
        {
            return Err(invalid("node arrays differ in length".to_string()));
        }

        let mut nodes = Vec::with_capacity(n_nodes);
        for node in 0..n_nodes {
            let left = file.children_left[node];
            let right = file.children_right[node];
            let weights = &file.value[node];

            if weights.len() != n_classes {
                return Err(invalid(format!(
                    "node {node} has {} class weights, expected {n_classes}",
                    weights.len()
                )));
            }

            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(invalid(format!("node {node} has a negative or non-finite class weight")));
            }

            if left == TREE_LEAF && right == TREE_LEAF {
                nodes.push(Node::Leaf { proba: normalize(weights) });
                continue;
            }

            // Pre-order layout: children always follow their parent
            let child = |c: i64, side: &str| -> Result<usize, ArtifactError> {
                usize::try_from(c)
                    .ok()
                    .filter(|&c| c > node && c < n_nodes)
                    .ok_or_else(|| invalid(format!("node {node} has invalid {side} child {c}")))
            };

            let feature = usize::try_from(file.feature[node])
                .ok()
                .filter(|&f| f < FEATURE_COUNT)
                .ok_or_else(|| invalid(format!("node {node} splits on feature {}", file.feature[node])))?;

            let threshold = file.threshold[node];
            if threshold.is_nan() {
                return Err(invalid(format!("node {node} has a NaN threshold")));
            }

            nodes.push(Node::Split {
                feature,
                threshold,
                left: child(left, "left")?,
                right: child(right, "right")?,
            });
        }

        Ok(Self { nodes })
    }

    /// Class probabilities at the leaf this sample reaches
    pub fn leaf_proba(&self, x: &Features) -> &[f64] {
        let mut node = 0;
        loop {
            match &self.nodes[node] {
                Node::Leaf { proba } => return proba,
                Node::Split { feature, threshold, left, right } => {
                    // scikit-learn evaluates trees on float32 input
                    let value = x[*feature] as f32 as f64;
                    node = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let total = if total > 0.0 { total } else { 1.0 };
    weights.iter().map(|w| w / total).collect()
}

// ============================================================================
// FOREST
// ============================================================================

/// Ensemble of decision trees voting by averaged class probability
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    classes: Vec<i32>,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Parse and validate the JSON artifact
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let file: ForestFile = serde_json::from_str(json)?;

        if file.n_features != FEATURE_COUNT {
            return Err(ArtifactError::Invalid(format!(
                "classifier expects {} features, layout has {FEATURE_COUNT}",
                file.n_features
            )));
        }
        if let Some(names) = &file.feature_names {
            validate_columns(names)?;
        }
        if file.classes.is_empty() {
            return Err(ArtifactError::Invalid("classifier has no classes".to_string()));
        }
        if file.trees.is_empty() {
            return Err(ArtifactError::Invalid("classifier has no trees".to_string()));
        }

        let n_classes = file.classes.len();
        let trees = file
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, tree)| DecisionTree::from_file(i, tree, n_classes))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { classes: file.classes, trees })
    }

    pub fn classes(&self) -> &[i32] {
        &self.classes
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Mean class probabilities over all trees, ordered like `classes()`
    pub fn predict_proba(&self, x: &Features) -> Vec<f64> {
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.leaf_proba(x)) {
                *acc += p;
            }
        }

        let n = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n);
        proba
    }
}

impl QualityModel for RandomForest {
    fn predict(&self, scaled: &Features) -> i32 {
        let proba = self.predict_proba(scaled);

        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        self.classes[best]
    }

    fn classes(&self) -> &[i32] {
        &self.classes
    }
}
