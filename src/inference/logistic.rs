use super::classifier::{Classifier, FeatureMatrix, ModelError};

/// Binary logistic regression over raw (unscaled) features.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        if coefficients.is_empty() {
            return Err(ModelError::Invalid("logistic regression has no coefficients".into()));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Invalid(
                "logistic regression parameters must be finite".into(),
            ));
        }
        Ok(Self {
            coefficients,
            intercept,
        })
    }

    fn decision(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    fn decisions(&self, batch: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        self.check_shape(batch)?;
        batch
            .rows()
            .map(|row| {
                let z = self.decision(row);
                if z.is_nan() {
                    Err(ModelError::InvalidOutput)
                } else {
                    Ok(z)
                }
            })
            .collect()
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split on sign so exp() never overflows.
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &'static str {
        "logistic_regression"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn classify_probability(&self, batch: &FeatureMatrix) -> Result<Vec<[f64; 2]>, ModelError> {
        Ok(self
            .decisions(batch)?
            .into_iter()
            .map(|z| {
                let p1 = sigmoid(z);
                [1.0 - p1, p1]
            })
            .collect())
    }

    fn classify(&self, batch: &FeatureMatrix) -> Result<Vec<u8>, ModelError> {
        Ok(self
            .decisions(batch)?
            .into_iter()
            .map(|z| u8::from(z > 0.0))
            .collect())
    }
}
