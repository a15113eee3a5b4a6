use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::classifier::ModelError;

const MEDIUM_THRESHOLD: f64 = 0.3;
const HIGH_THRESHOLD: f64 = 0.6;
const PROBABILITY_DP: u32 = 3;

/// Three-tier label derived from the positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `[0, 0.3)` is Low, `[0.3, 0.6)` is Medium, `[0.6, 1]` is High.
    pub fn from_probability(p: f64) -> Self {
        if p < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if p < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to three decimal places, ties to even, working on the exact
/// binary value of `p`.
pub fn round_probability(p: f64) -> Result<f64, ModelError> {
    if !p.is_finite() {
        return Err(ModelError::InvalidOutput);
    }
    Decimal::from_f64_retain(p)
        .map(|d| d.round_dp_with_strategy(PROBABILITY_DP, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .ok_or(ModelError::InvalidOutput)
}
