//! Domain types for the BMI classification pipeline.
//!
//! This crate defines the record types that flow through the pipeline
//! (raw, cleaned, classified) together with the classification
//! vocabulary: gender, BMI category, and the health risk associated
//! with each category.
//!
//! The BMI band table is modeled as an exhaustive enum lookup rather
//! than chained conditionals so that the undocumented gap between the
//! first two bands (BMI strictly between 18.4 and 18.5) is an explicit
//! branch, not an accidental fallthrough.

mod enums;
mod precision;
mod record;

pub use enums::{BmiCategory, Gender, HealthRisk};
pub use precision::quantize_half;
pub use record::{ClassifiedRecord, CleanedRecord, RawRecord};
