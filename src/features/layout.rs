//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema**
//!
//! The scaler and the classifier were fitted on columns in exactly this
//! order. Reordering `FEATURE_LAYOUT` silently corrupts every prediction, so
//! artifacts that carry column names are checked against `COLUMN_NAMES` when
//! they are loaded.

use serde::Serialize;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Total number of features
pub const FEATURE_COUNT: usize = 11;

/// Feature keys in exact order they appear in the vector
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "fixed_acidity",        // 0
    "volatile_acidity",     // 1
    "citric_acid",          // 2
    "residual_sugar",       // 3: log1p
    "chlorides",            // 4: log1p
    "free_sulfur_dioxide",  // 5: log1p
    "total_sulfur_dioxide", // 6: log1p
    "density",              // 7
    "pH",                   // 8
    "sulphates",            // 9: log1p
    "alcohol",              // 10
];

/// Column names as they appear in the training data (and in the artifacts)
pub const COLUMN_NAMES: [&str; FEATURE_COUNT] = [
    "fixed acidity",
    "volatile acidity",
    "citric acid",
    "residual sugar",
    "chlorides",
    "free sulfur dioxide",
    "total sulfur dioxide",
    "density",
    "pH",
    "sulphates",
    "alcohol",
];

/// Ordered feature values
pub type Features = [f64; FEATURE_COUNT];

// ============================================================================
// FIELD SPECS (input bounds)
// ============================================================================

/// One bounded numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// printf-style display format
    pub format: &'static str,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self { key, label, min, max, default, format: "%.2f" }
    }

    const fn with_format(mut self, format: &'static str) -> Self {
        self.format = format;
        self
    }

    /// Digits after the decimal point, taken from `format`
    pub fn decimals(&self) -> usize {
        self.format
            .trim_start_matches('%')
            .trim_end_matches('f')
            .trim_start_matches('.')
            .parse()
            .unwrap_or(2)
    }

    /// Smallest increment the input widget accepts
    pub fn step(&self) -> f64 {
        10f64.powi(-(self.decimals() as i32))
    }

    /// Render a value with this field's format
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Input fields in layout order
pub static FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec::new("fixed_acidity", "Fixed Acidity", 0.0, 20.0, 7.4),
    FieldSpec::new("volatile_acidity", "Volatile Acidity", 0.0, 2.0, 0.70),
    FieldSpec::new("citric_acid", "Citric Acid", 0.0, 1.0, 0.00),
    FieldSpec::new("residual_sugar", "Residual Sugar", 0.0, 20.0, 2.0),
    FieldSpec::new("chlorides", "Chlorides", 0.0, 1.0, 0.08),
    FieldSpec::new("free_sulfur_dioxide", "Free Sulfur Dioxide", 0.0, 100.0, 15.0),
    FieldSpec::new("total_sulfur_dioxide", "Total Sulfur Dioxide", 0.0, 300.0, 46.0),
    FieldSpec::new("density", "Density", 0.99, 1.01, 0.9968).with_format("%.4f"),
    FieldSpec::new("pH", "pH", 2.0, 4.5, 3.31),
    FieldSpec::new("sulphates", "Sulphates", 0.0, 2.0, 0.66),
    FieldSpec::new("alcohol", "Alcohol", 5.0, 15.0, 10.5),
];

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Column names of an artifact did not match `COLUMN_NAMES`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("feature layout mismatch: expected {expected:?}, got {actual:?}")]
pub struct LayoutMismatchError {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// Validate that artifact column names match the current layout, in order
pub fn validate_columns(names: &[String]) -> Result<(), LayoutMismatchError> {
    let matches = names.len() == FEATURE_COUNT
        && names.iter().zip(COLUMN_NAMES.iter()).all(|(a, e)| a == e);

    if matches {
        Ok(())
    } else {
        Err(LayoutMismatchError {
            expected: COLUMN_NAMES.iter().map(|s| s.to_string()).collect(),
            actual: names.to_vec(),
        })
    }
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by key
pub fn feature_index(key: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&k| k == key)
}

/// Get field spec by key
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}
