//! Log transform applied before scaling (same as training)

use super::layout::{feature_index, Features};
use super::vector::FeatureVector;
use crate::model::scaler::StandardScaler;

/// Fields that receive `log1p` before scaling
pub const LOG1P_FEATURES: [&str; 5] = [
    "residual_sugar",
    "chlorides",
    "free_sulfur_dioxide",
    "total_sulfur_dioxide",
    "sulphates",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// `ln(1 + x)` is undefined for `x <= -1`
    #[error("{feature} = {value} is outside the domain of log1p (must be > -1)")]
    Domain { feature: &'static str, value: f64 },
}

/// `ln(1 + x)`, failing outside its domain
pub fn log1p(feature: &'static str, value: f64) -> Result<f64, TransformError> {
    // also rejects NaN
    if !(value > -1.0) {
        return Err(TransformError::Domain { feature, value });
    }
    Ok(value.ln_1p())
}

/// Replace the `LOG1P_FEATURES` entries with their log1p; others untouched
pub fn apply_log1p(values: &Features) -> Result<Features, TransformError> {
    let mut out = *values;
    for feature in LOG1P_FEATURES {
        if let Some(i) = feature_index(feature) {
            out[i] = log1p(feature, values[i])?;
        }
    }
    Ok(out)
}

/// Full preprocessing: log1p, then the fitted scaler, in layout order
pub fn transform(raw: &FeatureVector, scaler: &StandardScaler) -> Result<Features, TransformError> {
    let logged = apply_log1p(&raw.values())?;
    Ok(scaler.transform(&logged))
}
