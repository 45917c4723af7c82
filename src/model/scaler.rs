//! Standard scaler fitted at training time
//!
//! Loaded from a JSON export of the fitted scaler's `mean_` / `scale_`.

use serde::Deserialize;

use super::artifacts::ArtifactError;
use crate::features::layout::{validate_columns, Features, FEATURE_COUNT};

/// On-disk shape of the scaler artifact
#[derive(Debug, Deserialize)]
struct ScalerFile {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Per-feature affine transform `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Features,
    scale: Features,
}

impl StandardScaler {
    pub fn new(mean: Features, scale: Features) -> Result<Self, ArtifactError> {
        for (i, (m, s)) in mean.iter().zip(scale.iter()).enumerate() {
            if !m.is_finite() {
                return Err(ArtifactError::Invalid(format!("scaler mean[{i}] is not finite")));
            }
            if !s.is_finite() || *s == 0.0 {
                return Err(ArtifactError::Invalid(format!(
                    "scaler scale[{i}] must be finite and non-zero, got {s}"
                )));
            }
        }
        Ok(Self { mean, scale })
    }

    /// Parse and validate the JSON artifact
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let file: ScalerFile = serde_json::from_str(json)?;

        if let Some(names) = &file.feature_names {
            validate_columns(names)?;
        }

        let mean = to_features("mean", file.mean)?;
        let scale = to_features("scale", file.scale)?;
        Self::new(mean, scale)
    }

    pub fn mean(&self) -> &Features {
        &self.mean
    }

    pub fn scale(&self) -> &Features {
        &self.scale
    }

    pub fn transform(&self, values: &Features) -> Features {
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (values[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

fn to_features(name: &str, values: Vec<f64>) -> Result<Features, ArtifactError> {
    let len = values.len();
    values.try_into().map_err(|_| {
        ArtifactError::Invalid(format!(
            "scaler {name} has {len} entries, expected {FEATURE_COUNT}"
        ))
    })
}
