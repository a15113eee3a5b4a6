use serde::Deserialize;

use super::classifier::{Classifier, FeatureMatrix, ModelError};

/// One node of a fitted decision tree.
///
/// Rows with `x[feature] <= threshold` descend to `left`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Class weights `[class 0, class 1]`; counts or fractions.
        value: [f64; 2],
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Children must come after their parent, so every walk from the root
    /// terminates in at most `nodes.len()` steps.
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        let len = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature}, model has {n_features}"
                        ));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {idx} has a NaN threshold"));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= len {
                            return Err(format!("node {idx} has invalid child index {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(format!("leaf {idx} has a negative or non-finite weight"));
                    }
                    if value[0] + value[1] <= 0.0 {
                        return Err(format!("leaf {idx} has zero total weight"));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_probability(&self, row: &[f64]) -> [f64; 2] {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[feature] <= threshold { left } else { right };
                }
                TreeNode::Leaf { value } => {
                    let total = value[0] + value[1];
                    return [value[0] / total, value[1] / total];
                }
            }
        }
    }
}

/// Ensemble of decision trees whose leaf class distributions are averaged.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>, n_features: usize) -> Result<Self, ModelError> {
        if trees.is_empty() {
            return Err(ModelError::Invalid("random forest has no trees".into()));
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|e| ModelError::Invalid(format!("tree {i}: {e}")))?;
        }
        Ok(Self { trees, n_features })
    }
}

impl Classifier for RandomForest {
    fn kind(&self) -> &'static str {
        "random_forest"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn classify_probability(&self, batch: &FeatureMatrix) -> Result<Vec<[f64; 2]>, ModelError> {
        self.check_shape(batch)?;
        let n = self.trees.len() as f64;
        Ok(batch
            .rows()
            .map(|row| {
                let [s0, s1] = self.trees.iter().fold([0.0, 0.0], |[a, b], tree| {
                    let [p0, p1] = tree.leaf_probability(row);
                    [a + p0, b + p1]
                });
                [s0 / n, s1 / n]
            })
            .collect())
    }
}
