//! Model Module - scaling and random forest inference
//!
//! Artifacts are loaded once at startup and shared read-only.
//! `QualityModel` is the seam between the pipeline and the classifier.

pub mod artifacts;
pub mod forest;
pub mod quality;
pub mod scaler;

// Re-export common types
pub use artifacts::{ArtifactError, ArtifactPaths};
pub use forest::RandomForest;
pub use quality::{PredictionResult, QualityBand, QualityModel, QualityPredictor};
pub use scaler::StandardScaler;
