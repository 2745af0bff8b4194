//! BMI classification pipeline.
//!
//! This crate turns a raw tabular dataset of gender, height, and
//! weight into an immutable classified table and answers aggregate
//! frequency queries over it.
//!
//! # Pipeline
//!
//! Raw records flow through pure stages, composed by the constructor:
//! sanitization (numeric-text cleaning, range filtering, gender
//! filtering), BMI computation at half precision, and band
//! classification. Dirty rows are silently dropped; only an unreadable
//! or malformed source fails construction.
//!
//! # Example
//!
//! ```ignore
//! use bmi_core::BmiClassifier;
//!
//! let classifier = BmiClassifier::from_path("bmi_data.json", false)?;
//! let overweight = classifier.get_category_frequency(&["Overweight", "Moderately obese"]);
//! ```

mod classifier;
mod classify;
mod error;
mod ingest;
mod sanitize;

// === Error Types ===
pub use error::{ClassifierError, Result};

// === Pipeline Stages ===
pub use classify::{classify_records, compute_bmi};
pub use ingest::read_records;
pub use sanitize::{HEIGHT_CM_RANGE, WEIGHT_KG_RANGE, clean_gender, clean_numeric, sanitize};

// === Classifier ===
pub use classifier::{BmiClassifier, HEAD_ROWS};
