//! Quality prediction - model seam, bands, and the end-to-end predictor

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::scaler::StandardScaler;
use crate::features::{transform, FeatureVector, Features, TransformError};

/// Anything that maps a scaled feature vector to an integer quality label
pub trait QualityModel: Send + Sync {
    fn predict(&self, scaled: &Features) -> i32;

    /// Labels the model can produce
    fn classes(&self) -> &[i32];
}

/// Qualitative band derived from the integer score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityBand {
    High,
    Average,
    Low,
}

impl QualityBand {
    /// Thresholds are inclusive-low: 7 is high, 5 is average
    pub fn from_score(score: i32) -> Self {
        if score >= 7 {
            QualityBand::High
        } else if score >= 5 {
            QualityBand::Average
        } else {
            QualityBand::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            QualityBand::High => "High quality wine!",
            QualityBand::Average => "Average quality wine",
            QualityBand::Low => "Low quality wine",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QualityBand::High => "✅",
            QualityBand::Average => "⚠️",
            QualityBand::Low => "❌",
        }
    }

    /// Only high quality wines get the balloons
    pub fn celebrate(&self) -> bool {
        matches!(self, QualityBand::High)
    }
}

/// Prediction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub score: i32,
    pub band: QualityBand,
}

impl PredictionResult {
    pub fn from_score(score: i32) -> Self {
        Self {
            score,
            band: QualityBand::from_score(score),
        }
    }
}

/// Scaler + classifier, shared read-only across requests
#[derive(Clone)]
pub struct QualityPredictor {
    scaler: StandardScaler,
    model: Arc<dyn QualityModel>,
}

impl QualityPredictor {
    pub fn new(scaler: StandardScaler, model: Arc<dyn QualityModel>) -> Self {
        Self { scaler, model }
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn classes(&self) -> &[i32] {
        self.model.classes()
    }

    /// Transform a raw sample and score it
    pub fn predict(&self, raw: &FeatureVector) -> Result<PredictionResult, TransformError> {
        let scaled = transform(raw, &self.scaler)?;
        tracing::debug!(?scaled, "scaled features");

        let result = PredictionResult::from_score(self.model.predict(&scaled));
        tracing::info!(score = result.score, band = ?result.band, "wine quality predicted");
        Ok(result)
    }
}

impl std::fmt::Debug for QualityPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityPredictor")
            .field("scaler", &self.scaler)
            .finish_non_exhaustive()
    }
}
