//! JSON prediction API

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppResult, AppState};
use crate::features::{FeatureVector, FieldSpec, FIELDS};
use crate::model::QualityBand;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub score: i32,
    pub band: QualityBand,
    pub message: &'static str,
    pub celebrate: bool,
}

/// Predict quality for one sample
pub async fn predict(
    State(state): State<AppState>,
    Json(sample): Json<FeatureVector>,
) -> AppResult<Json<PredictResponse>> {
    let result = super::score_sample(&state, &sample)?;

    Ok(Json(PredictResponse {
        score: result.score,
        band: result.band,
        message: result.band.message(),
        celebrate: result.band.celebrate(),
    }))
}

/// Input field table (bounds, defaults, formats)
pub async fn fields() -> Json<&'static [FieldSpec]> {
    Json(&FIELDS)
}
