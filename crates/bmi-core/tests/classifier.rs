//! End-to-end tests for the classifier pipeline and frequency engine.

use std::io::Write;
use std::path::PathBuf;

use serde_json::json;

use bmi_core::{BmiClassifier, ClassifierError, HEAD_ROWS};
use bmi_model::{BmiCategory, Gender, RawRecord};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bmi_data.json")
}

fn raw_records(value: serde_json::Value) -> Vec<RawRecord> {
    serde_json::from_value(value).expect("valid raw records")
}

/// The fixture holds 15 rows: 9 valid, plus a string-contaminated
/// height, an out-of-range weight, an out-of-range height, an unknown
/// gender, a non-integral height, and a negative height.
#[test]
fn dirty_rows_are_absent_from_the_table() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    assert_eq!(classifier.len(), 9);
    for record in classifier.records() {
        assert!((50..=300).contains(&record.height_cm));
        assert!((5..=750).contains(&record.weight_kg));
        assert!(matches!(record.gender, Gender::Male | Gender::Female));
    }
}

#[test]
fn every_band_is_represented_with_expected_counts() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    let expected = [
        (BmiCategory::Underweight, 1),
        (BmiCategory::NormalWeight, 2),
        (BmiCategory::Overweight, 1),
        (BmiCategory::ModeratelyObese, 3),
        (BmiCategory::SeverelyObese, 1),
        (BmiCategory::VerySeverelyObese, 1),
    ];
    for (category, count) in expected {
        assert_eq!(classifier.category_count(category), count, "{category}");
    }
    assert_eq!(classifier.distinct_categories().len(), 6);
}

#[test]
fn overweight_and_above_frequency() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    let result = classifier.get_category_frequency(&[
        "Overweight",
        "Moderately obese",
        "Severely obese",
        "Very severely obese",
    ]);
    // Every valid record with BMI >= 25.0.
    assert_eq!(result, Some(6));
}

#[test]
fn full_category_set_matches_table_size() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    let labels: Vec<&str> = classifier
        .distinct_categories()
        .iter()
        .map(BmiCategory::as_str)
        .collect();
    assert_eq!(classifier.get_category_frequency(&labels), Some(classifier.len()));
}

#[test]
fn empty_request_yields_no_result() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    // No definitive result, distinguishable from a zero count.
    assert_eq!(classifier.get_category_frequency::<&str>(&[]), None);
}

#[test]
fn absent_category_counts_as_zero_not_no_result() {
    let records = raw_records(json!([
        { "Gender": "Male", "HeightCm": 180, "WeightKg": 77 },
        { "Gender": "Female", "HeightCm": 166, "WeightKg": 62 }
    ]));
    let classifier = BmiClassifier::from_raw_records(&records);
    // Both rows are normal weight; "Overweight" is absent but the
    // request still reconciles, so the count is a definitive zero.
    assert_eq!(classifier.get_category_frequency(&["Overweight"]), Some(0));
}

#[test]
fn unrecognized_label_is_skipped_with_a_diagnostic() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    // The typo contributes nothing; the valid label still counts.
    let result = classifier.get_category_frequency(&["Overweight", "Owerweight"]);
    assert_eq!(result, Some(1));
}

#[test]
fn duplicate_labels_fail_the_consistency_check() {
    let classifier = BmiClassifier::from_path(fixture_path(), false).expect("fixture loads");
    // A duplicated label double-counts its category, so the
    // reconciliation cannot hold and no definitive result exists.
    let result = classifier.get_category_frequency(&["Overweight", "Overweight"]);
    assert_eq!(result, None);
}

#[test]
fn band_gap_rows_stay_uncategorized_and_uncounted() {
    // 100kg at 233cm lands at 18.421875 after half-precision
    // rounding: inside the uncovered (18.4, 18.5) interval.
    let records = raw_records(json!([
        { "Gender": "Male", "HeightCm": 233, "WeightKg": 100 }
    ]));
    let classifier = BmiClassifier::from_raw_records(&records);
    assert_eq!(classifier.len(), 1);
    assert_eq!(classifier.records()[0].category, None);
    assert!(classifier.distinct_categories().is_empty());
    // The gap row contributes to no count, so any request over an
    // empty category set reconciles at zero.
    assert_eq!(classifier.get_category_frequency(&["Underweight"]), Some(0));
}

#[test]
fn verbose_construction_succeeds() {
    let classifier = BmiClassifier::from_path(fixture_path(), true).expect("fixture loads");
    assert_eq!(classifier.head(HEAD_ROWS).len(), HEAD_ROWS);
    assert_eq!(classifier.head(100).len(), classifier.len());
}

#[test]
fn missing_source_fails_construction() {
    let err = BmiClassifier::from_path("/nonexistent/bmi_data.json", false)
        .expect_err("missing file must fail");
    assert!(matches!(err, ClassifierError::SourceRead { .. }));
}

#[test]
fn malformed_source_fails_construction() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ not an array ").expect("write");
    let err =
        BmiClassifier::from_path(file.path(), false).expect_err("malformed source must fail");
    assert!(matches!(err, ClassifierError::SourceParse { .. }));
}
