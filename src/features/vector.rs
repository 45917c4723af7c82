//! Feature Vector - one submitted wine sample
//!
//! Built fresh from each form or JSON submission and never persisted.
//! Field bounds mirror `FIELDS`; they are enforced at the HTTP boundary only.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::layout::{Features, FieldSpec, FEATURE_COUNT, FIELDS};

/// Raw (untransformed) measurements in named form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FeatureVector {
    #[validate(range(min = 0.0, max = 20.0))]
    pub fixed_acidity: f64,
    #[validate(range(min = 0.0, max = 2.0))]
    pub volatile_acidity: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub citric_acid: f64,
    #[validate(range(min = 0.0, max = 20.0))]
    pub residual_sugar: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub chlorides: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub free_sulfur_dioxide: f64,
    #[validate(range(min = 0.0, max = 300.0))]
    pub total_sulfur_dioxide: f64,
    #[validate(range(min = 0.99, max = 1.01))]
    pub density: f64,
    #[serde(rename = "pH", alias = "ph")]
    #[validate(range(min = 2.0, max = 4.5))]
    pub ph: f64,
    #[validate(range(min = 0.0, max = 2.0))]
    pub sulphates: f64,
    #[validate(range(min = 5.0, max = 15.0))]
    pub alcohol: f64,
}

impl FeatureVector {
    /// Create from values in layout order
    pub fn from_values(values: Features) -> Self {
        let [fixed_acidity, volatile_acidity, citric_acid, residual_sugar, chlorides, free_sulfur_dioxide, total_sulfur_dioxide, density, ph, sulphates, alcohol] =
            values;

        Self {
            fixed_acidity,
            volatile_acidity,
            citric_acid,
            residual_sugar,
            chlorides,
            free_sulfur_dioxide,
            total_sulfur_dioxide,
            density,
            ph,
            sulphates,
            alcohol,
        }
    }

    /// Values in layout order (the order the artifacts were fitted on)
    pub fn values(&self) -> Features {
        [
            self.fixed_acidity,
            self.volatile_acidity,
            self.citric_acid,
            self.residual_sugar,
            self.chlorides,
            self.free_sulfur_dioxide,
            self.total_sulfur_dioxide,
            self.density,
            self.ph,
            self.sulphates,
            self.alcohol,
        ]
    }

    /// Range checks plus finiteness; NaN slips past `range` because every
    /// comparison with it is false
    pub fn check_bounds(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        for (spec, value) in self.fields() {
            if !value.is_finite() {
                errors.add(spec.key, ValidationError::new("finite"));
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Pairs each field spec with this sample's value
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, f64)> {
        FIELDS.iter().zip(self.values())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, spec) in values.iter_mut().zip(FIELDS.iter()) {
            *slot = spec.default;
        }
        Self::from_values(values)
    }
}

/// Human readable summary of out-of-range fields
pub fn describe_violations(errors: &ValidationErrors) -> String {
    let mut keys: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
    keys.sort();

    let parts: Vec<String> = FIELDS
        .iter()
        .filter(|spec| keys.iter().any(|k| k.eq_ignore_ascii_case(spec.key)))
        .map(|spec| {
            format!(
                "{} must be between {} and {}",
                spec.label,
                spec.format_value(spec.min),
                spec.format_value(spec.max)
            )
        })
        .collect();

    if parts.is_empty() {
        "Invalid input".to_string()
    } else {
        parts.join("; ")
    }
}
