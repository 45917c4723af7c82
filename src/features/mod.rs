//! Features Module - wine sample input and preprocessing
//!
//! Layout, bounded input fields, and the log1p + scaling transform.

pub mod layout;
pub mod vector;
pub mod transform;

pub use layout::{Features, FieldSpec, FEATURE_COUNT, FEATURE_LAYOUT, FIELDS};
pub use vector::FeatureVector;
pub use transform::{transform, TransformError, LOG1P_FEATURES};
