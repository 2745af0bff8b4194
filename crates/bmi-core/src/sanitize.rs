//! Row sanitization.
//!
//! Raw records are reduced to [`CleanedRecord`]s by a fixed sequence
//! of pure, per-column checks. The order matters and is part of the
//! contract: numeric-text cleaning runs before range filtering, so a
//! row with an out-of-range but purely numeric value survives the
//! first stage and is only removed by the second.
//!
//! Dropped rows are silent; the caller observes a smaller table. Drop
//! counts are logged at debug level for troubleshooting.

use std::borrow::Cow;

use serde_json::Value;

use bmi_model::{CleanedRecord, Gender, RawRecord};

/// Lower and upper bounds (inclusive) accepted for `HeightCm`.
pub const HEIGHT_CM_RANGE: (i16, i16) = (50, 300);

/// Lower and upper bounds (inclusive) accepted for `WeightKg`.
pub const WEIGHT_KG_RANGE: (i16, i16) = (5, 750);

/// Textual form of a raw value, as used by the digit predicate.
///
/// Strings are used as-is; every other JSON value is rendered, so an
/// integer `96` becomes `"96"`, a float `172.5` becomes `"172.5"`,
/// and `null` becomes `"null"`.
fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

/// True when `text` consists solely of digit characters.
///
/// This is the membership test for the numeric-text stage: signs,
/// decimal points, units, and whitespace all fail it.
fn is_digit_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Clean a single numeric column value: apply the digit predicate to
/// its textual form, then coerce to `i16`.
///
/// Returns `None` for missing values, non-digit text, and values that
/// do not fit the 16-bit signed range.
pub fn clean_numeric(value: Option<&Value>) -> Option<i16> {
    let value = value?;
    let text = value_text(value);
    if !is_digit_text(&text) {
        return None;
    }
    text.parse::<i16>().ok()
}

/// Clean the gender column: only the exact accepted labels pass.
pub fn clean_gender(value: Option<&Value>) -> Option<Gender> {
    value?.as_str()?.parse().ok()
}

fn in_range(value: i16, (low, high): (i16, i16)) -> bool {
    (low..=high).contains(&value)
}

/// Sanitize raw records into cleaned records.
///
/// Stages, in order: numeric-text cleaning and `i16` coercion for
/// `HeightCm` and `WeightKg`, then range filtering for both columns,
/// then the gender filter. A row is dropped at the first stage it
/// fails.
pub fn sanitize(records: &[RawRecord]) -> Vec<CleanedRecord> {
    let mut dropped_non_numeric = 0usize;
    let mut dropped_out_of_range = 0usize;
    let mut dropped_gender = 0usize;

    let mut cleaned = Vec::with_capacity(records.len());
    for record in records {
        let (Some(height_cm), Some(weight_kg)) = (
            clean_numeric(record.height_cm.as_ref()),
            clean_numeric(record.weight_kg.as_ref()),
        ) else {
            dropped_non_numeric += 1;
            continue;
        };
        if !in_range(height_cm, HEIGHT_CM_RANGE) || !in_range(weight_kg, WEIGHT_KG_RANGE) {
            dropped_out_of_range += 1;
            continue;
        }
        let Some(gender) = clean_gender(record.gender.as_ref()) else {
            dropped_gender += 1;
            continue;
        };
        cleaned.push(CleanedRecord {
            gender,
            height_cm,
            weight_kg,
        });
    }

    tracing::debug!(
        kept = cleaned.len(),
        dropped_non_numeric,
        dropped_out_of_range,
        dropped_gender,
        "Sanitized raw records"
    );
    cleaned
}
