//! Command implementations.

use anyhow::{Context, bail};

use bmi_core::{BmiClassifier, HEAD_ROWS};

use crate::cli::{FrequencyArgs, SummaryArgs};
use crate::summary::{print_head, print_summary};

/// Categories counted when the frequency command gets no explicit
/// labels: every band at or above BMI 25.0.
const DEFAULT_CATEGORIES: [&str; 4] = [
    "Overweight",
    "Moderately obese",
    "Severely obese",
    "Very severely obese",
];

pub fn run_frequency(args: &FrequencyArgs) -> anyhow::Result<()> {
    let classifier = BmiClassifier::from_path(&args.data, false)
        .with_context(|| format!("failed to build classifier from {}", args.data.display()))?;
    if args.head {
        print_head(classifier.head(HEAD_ROWS));
    }

    let categories: Vec<String> = if args.categories.is_empty() {
        DEFAULT_CATEGORIES.iter().map(|s| (*s).to_string()).collect()
    } else {
        args.categories.clone()
    };

    match classifier.get_category_frequency(&categories) {
        Some(count) => {
            println!(
                "Number of people classified as [{}]: {count}",
                categories.join(", ")
            );
            Ok(())
        }
        None => bail!("unable to confirm a count for the requested categories (see diagnostics)"),
    }
}

pub fn run_summary(args: &SummaryArgs) -> anyhow::Result<()> {
    let classifier = BmiClassifier::from_path(&args.data, false)
        .with_context(|| format!("failed to build classifier from {}", args.data.display()))?;
    if args.head {
        print_head(classifier.head(HEAD_ROWS));
    }
    print_summary(&classifier);
    Ok(())
}
