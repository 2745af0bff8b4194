//! The classifier facade and its frequency-query engine.

use std::path::Path;
use std::time::Instant;

use bmi_model::{BmiCategory, ClassifiedRecord, RawRecord};

use crate::classify::classify_records;
use crate::error::Result;
use crate::ingest::read_records;
use crate::sanitize::sanitize;

/// Number of leading rows surfaced for inspection, both by verbose
/// construction and by callers rendering a table head.
pub const HEAD_ROWS: usize = 5;

/// A classified BMI table with aggregate frequency queries.
///
/// Built once from a raw dataset; the enriched table is immutable for
/// the lifetime of the value, so queries are pure reads and safe to
/// share. Rebuilding means constructing a new classifier.
#[derive(Debug, Clone)]
pub struct BmiClassifier {
    records: Vec<ClassifiedRecord>,
}

impl BmiClassifier {
    /// Build a classifier from a JSON source file.
    ///
    /// Runs the whole pipeline eagerly: ingestion, sanitization, BMI
    /// computation, and band classification. An unreadable or
    /// malformed source fails the construction attempt; no partially
    /// built classifier escapes. When `verbose` is set, the leading
    /// classified rows are logged for inspection.
    pub fn from_path(path: impl AsRef<Path>, verbose: bool) -> Result<Self> {
        let start = Instant::now();
        let raw = read_records(path.as_ref())?;
        let classifier = Self::from_raw_records(&raw);
        tracing::info!(
            records = classifier.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built BMI classifier"
        );
        if verbose {
            for record in classifier.head(HEAD_ROWS) {
                tracing::info!(?record, "Classified row");
            }
        }
        Ok(classifier)
    }

    /// Build a classifier from raw records already in memory.
    ///
    /// Dirty rows are filtered, never reported as errors, so this
    /// constructor is infallible.
    pub fn from_raw_records(records: &[RawRecord]) -> Self {
        let cleaned = sanitize(records);
        Self {
            records: classify_records(&cleaned),
        }
    }

    /// The classified table, in source order.
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    /// Number of rows in the classified table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no row survived the pipeline.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The leading rows of the classified table.
    pub fn head(&self, n: usize) -> &[ClassifiedRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Number of rows classified into `category`.
    pub fn category_count(&self, category: BmiCategory) -> usize {
        self.records
            .iter()
            .filter(|record| record.category == Some(category))
            .count()
    }

    /// The distinct categories present in the table, in band order.
    ///
    /// Rows without a category (band-gap BMI values) contribute no
    /// entry here.
    pub fn distinct_categories(&self) -> Vec<BmiCategory> {
        BmiCategory::ALL
            .into_iter()
            .filter(|&category| self.records.iter().any(|r| r.category == Some(category)))
            .collect()
    }

    /// Aggregate frequency of the requested categories.
    ///
    /// Labels are matched exactly against the category labels present
    /// in the table. A label that matches nothing earns a warning
    /// diagnostic and contributes no count; processing continues with
    /// the remaining labels.
    ///
    /// Returns `None`, never `Some(0)`, in the cases where no
    /// definitive result exists: an empty request, or a failed
    /// reconciliation between the accumulated count and the rest of
    /// the table. Callers must treat `None` as "unable to confirm
    /// count", not as zero.
    pub fn get_category_frequency<S: AsRef<str>>(&self, categories: &[S]) -> Option<usize> {
        if categories.is_empty() {
            return None;
        }

        let present = self.distinct_categories();
        let mut category_count = 0usize;
        for label in categories {
            let label = label.as_ref();
            match present.iter().find(|category| category.as_str() == label) {
                Some(&category) => category_count += self.category_count(category),
                None => {
                    tracing::warn!(category = label, "Please check the category is correct/present");
                }
            }
        }

        let (total_category_count, uncounted_categories) = self.check_frequency(categories);
        if total_category_count - uncounted_categories == category_count {
            Some(category_count)
        } else {
            tracing::warn!(
                counted = category_count,
                uncounted = uncounted_categories,
                total = total_category_count,
                "Frequency counts failed to reconcile"
            );
            None
        }
    }

    /// Cross-check inputs for the frequency reconciliation: the total
    /// of all category counts, and the counts of categories present in
    /// the table but absent from the request.
    ///
    /// Uncategorized rows count toward neither figure.
    fn check_frequency<S: AsRef<str>>(&self, categories: &[S]) -> (usize, usize) {
        let present = self.distinct_categories();
        let total: usize = present
            .iter()
            .map(|&category| self.category_count(category))
            .sum();
        let uncounted: usize = present
            .iter()
            .filter(|category| {
                !categories
                    .iter()
                    .any(|label| label.as_ref() == category.as_str())
            })
            .map(|&category| self.category_count(category))
            .sum();
        (total, uncounted)
    }
}
