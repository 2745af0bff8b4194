//! BMI computation and band classification.
//!
//! Runs once, over the whole cleaned table, at construction time.

use bmi_model::{BmiCategory, ClassifiedRecord, CleanedRecord, quantize_half};

/// Compute the BMI for a cleaned record: `kg / m^2`, quantized to
/// half-precision.
pub fn compute_bmi(record: &CleanedRecord) -> f32 {
    let height_m = f64::from(record.height_cm) / 100.0;
    quantize_half(f64::from(record.weight_kg) / (height_m * height_m))
}

/// Classify every cleaned record.
///
/// Records with a non-finite BMI cannot occur after sanitization
/// (height is bounded away from zero) but are defensively excluded
/// rather than retained with a null category. Records whose BMI falls
/// in a gap between bands stay in the table with `category: None`.
pub fn classify_records(records: &[CleanedRecord]) -> Vec<ClassifiedRecord> {
    records
        .iter()
        .filter_map(|record| {
            let bmi = compute_bmi(record);
            if !bmi.is_finite() {
                tracing::warn!(
                    height_cm = record.height_cm,
                    weight_kg = record.weight_kg,
                    "Skipping record with undefined BMI"
                );
                return None;
            }
            Some(ClassifiedRecord {
                gender: record.gender,
                height_cm: record.height_cm,
                weight_kg: record.weight_kg,
                bmi,
                category: BmiCategory::from_bmi(bmi),
            })
        })
        .collect()
}
