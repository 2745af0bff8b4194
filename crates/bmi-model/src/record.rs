//! Record types for each stage of the pipeline.
//!
//! A row moves through three shapes: [`RawRecord`] straight off the
//! source (fields may be missing, malformed, or of the wrong type),
//! [`CleanedRecord`] after sanitization (invariants hold), and
//! [`ClassifiedRecord`] after BMI computation and band lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{BmiCategory, Gender, HealthRisk};

/// A raw source row, exactly as deserialized.
///
/// Every field is kept as an untyped JSON value: heights and weights
/// arrive as strings, integers, floats, or worse, and gender may carry
/// labels outside the accepted set. Fields beyond the three known
/// columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Gender", default)]
    pub gender: Option<Value>,

    #[serde(rename = "HeightCm", default)]
    pub height_cm: Option<Value>,

    #[serde(rename = "WeightKg", default)]
    pub weight_kg: Option<Value>,
}

/// A sanitized row.
///
/// Invariants: `height_cm` is in `[50, 300]`, `weight_kg` is in
/// `[5, 750]`, both fit in `i16`, and `gender` is one of the accepted
/// labels. Rows that cannot satisfy these are dropped during
/// sanitization, never repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub gender: Gender,
    pub height_cm: i16,
    pub weight_kg: i16,
}

/// A cleaned row enriched with its BMI and band lookup result.
///
/// `bmi` is half-precision quantized. `category` is `None` only when
/// the quantized BMI falls in a gap between bands; such rows stay in
/// the table but are excluded from category counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    pub gender: Gender,
    pub height_cm: i16,
    pub weight_kg: i16,
    pub bmi: f32,
    pub category: Option<BmiCategory>,
}

impl ClassifiedRecord {
    /// Health risk for this record, derived 1:1 from the category.
    pub fn health_risk(&self) -> Option<HealthRisk> {
        self.category.map(|category| category.health_risk())
    }
}
