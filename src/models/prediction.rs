use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
///
/// Features, in order: pregnancies, glucose, blood pressure (mm Hg),
/// skin thickness (mm), insulin (mu U/ml), BMI, diabetes pedigree
/// function, age (years). The length is checked by the predictor, not here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(example = "sample_request")]
pub struct PredictionRequest {
    #[serde(deserialize_with = "deserialize_features")]
    #[schemars(with = "Vec<f64>")]
    pub features: Vec<f64>,
}

pub fn sample_request() -> PredictionRequest {
    PredictionRequest {
        features: vec![6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0],
    }
}

/// A feature value as clients send it: a number, a numeric string or a
/// boolean (`true` is 1.0).
struct LooseFloat(f64);

impl<'de> Deserialize<'de> for LooseFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LooseFloatVisitor)
    }
}

struct LooseFloatVisitor;

impl<'de> Visitor<'de> for LooseFloatVisitor {
    type Value = LooseFloat;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, a numeric string or a boolean")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<LooseFloat, E> {
        Ok(LooseFloat(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LooseFloat, E> {
        Ok(LooseFloat(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LooseFloat, E> {
        Ok(LooseFloat(v as f64))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<LooseFloat, E> {
        Ok(LooseFloat(if v { 1.0 } else { 0.0 }))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LooseFloat, E> {
        v.trim()
            .parse()
            .map(LooseFloat)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

fn deserialize_features<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let values = Vec::<LooseFloat>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|v| v.0).collect())
}
