//! HTTP handlers

pub mod health;
pub mod form;
pub mod predict;

use crate::{AppResult, AppState};
use crate::features::FeatureVector;
use crate::model::PredictionResult;

/// Check bounds, then run the full transform-and-predict flow
pub(crate) fn score_sample(state: &AppState, sample: &FeatureVector) -> AppResult<PredictionResult> {
    sample.check_bounds()?;
    Ok(state.predictor.predict(sample)?)
}
