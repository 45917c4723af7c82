//! Artifact loading - scaler and classifier, loaded once per process

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::forest::RandomForest;
use super::quality::QualityPredictor;
use super::scaler::StandardScaler;
use crate::features::layout::LayoutMismatchError;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid artifact: {0}")]
    Invalid(String),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),
}

/// Where the two artifacts live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub scaler: PathBuf,
}

static PREDICTOR: OnceCell<Arc<QualityPredictor>> = OnceCell::new();

fn read(path: &Path) -> Result<String, ArtifactError> {
    std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_scaler(path: &Path) -> Result<StandardScaler, ArtifactError> {
    StandardScaler::from_json(&read(path)?)
}

pub fn load_classifier(path: &Path) -> Result<RandomForest, ArtifactError> {
    RandomForest::from_json(&read(path)?)
}

/// Load both artifacts; either failing is fatal to the caller
pub fn load(paths: &ArtifactPaths) -> Result<QualityPredictor, ArtifactError> {
    tracing::info!("Loading classifier from: {}", paths.classifier.display());
    let forest = load_classifier(&paths.classifier)?;
    tracing::info!(
        "Classifier loaded: {} trees, classes {:?}",
        forest.n_trees(),
        forest.classes()
    );

    tracing::info!("Loading scaler from: {}", paths.scaler.display());
    let scaler = load_scaler(&paths.scaler)?;

    Ok(QualityPredictor::new(scaler, Arc::new(forest)))
}

/// Process-wide predictor; loaded on first call and reused afterwards.
///
/// `paths` only matters on the first successful call. Later calls return the
/// cached predictor whatever paths they pass.
pub fn shared(paths: &ArtifactPaths) -> Result<Arc<QualityPredictor>, ArtifactError> {
    PREDICTOR
        .get_or_try_init(|| load(paths).map(Arc::new))
        .cloned()
}
