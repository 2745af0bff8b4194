//! Type-safe enumerations for the classification vocabulary.
//!
//! These enums give compile-time safety for concepts that arrive as
//! strings in source data and query requests: gender, BMI category,
//! and health risk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of an individual as recorded in the source dataset.
///
/// Only `Male` and `Female` are accepted; rows carrying any other
/// value are dropped during sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the canonical label as it appears in source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender label. Only the exact labels `Male`/`Female`
    /// are accepted; rows are dropped rather than repaired, so no
    /// trimming or case folding happens here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// BMI category per the fixed band table.
///
/// | BMI range   | Category            |
/// |-------------|---------------------|
/// | <= 18.4     | Underweight         |
/// | 18.5 - 24.9 | Normal weight       |
/// | 25.0 - 29.9 | Overweight          |
/// | 30.0 - 34.9 | Moderately obese    |
/// | 35.0 - 39.9 | Severely obese      |
/// | >= 40.0     | Very severely obese |
///
/// The bands leave the open interval (18.4, 18.5) uncovered; a BMI in
/// that interval classifies to no category. The same structure repeats
/// at each subsequent boundary, though those gaps are only reachable
/// through half-precision rounding. This is documented legacy behavior
/// and is pinned by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ModeratelyObese,
    SeverelyObese,
    VerySeverelyObese,
}

impl BmiCategory {
    /// All categories in ascending band order.
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::ModeratelyObese,
        BmiCategory::SeverelyObese,
        BmiCategory::VerySeverelyObese,
    ];

    /// Classify a BMI value against the band table.
    ///
    /// Returns `None` for values falling between bands (the 18.4-18.5
    /// gap and its rounding-reachable siblings at higher boundaries)
    /// and for NaN input.
    pub fn from_bmi(bmi: f32) -> Option<BmiCategory> {
        if bmi <= 18.4 {
            Some(BmiCategory::Underweight)
        } else if (18.5..=24.9).contains(&bmi) {
            Some(BmiCategory::NormalWeight)
        } else if (25.0..=29.9).contains(&bmi) {
            Some(BmiCategory::Overweight)
        } else if (30.0..=34.9).contains(&bmi) {
            Some(BmiCategory::ModeratelyObese)
        } else if (35.0..=39.9).contains(&bmi) {
            Some(BmiCategory::SeverelyObese)
        } else if bmi >= 40.0 {
            Some(BmiCategory::VerySeverelyObese)
        } else {
            // Uncovered gap between bands, or NaN.
            None
        }
    }

    /// Returns the canonical category label.
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ModeratelyObese => "Moderately obese",
            BmiCategory::SeverelyObese => "Severely obese",
            BmiCategory::VerySeverelyObese => "Very severely obese",
        }
    }

    /// Returns the health risk associated with this category.
    pub fn health_risk(&self) -> HealthRisk {
        match self {
            BmiCategory::Underweight => HealthRisk::MalnutritionRisk,
            BmiCategory::NormalWeight => HealthRisk::LowRisk,
            BmiCategory::Overweight => HealthRisk::EnhancedRisk,
            BmiCategory::ModeratelyObese => HealthRisk::MediumRisk,
            BmiCategory::SeverelyObese => HealthRisk::HighRisk,
            BmiCategory::VerySeverelyObese => HealthRisk::VeryHighRisk,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BmiCategory {
    type Err = String;

    /// Parse a category label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "UNDERWEIGHT" => Ok(BmiCategory::Underweight),
            "NORMAL WEIGHT" => Ok(BmiCategory::NormalWeight),
            "OVERWEIGHT" => Ok(BmiCategory::Overweight),
            "MODERATELY OBESE" => Ok(BmiCategory::ModeratelyObese),
            "SEVERELY OBESE" => Ok(BmiCategory::SeverelyObese),
            "VERY SEVERELY OBESE" => Ok(BmiCategory::VerySeverelyObese),
            _ => Err(format!("Unknown BMI category: {s}")),
        }
    }
}

/// Health risk classification, in 1:1 correspondence with
/// [`BmiCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRisk {
    MalnutritionRisk,
    LowRisk,
    EnhancedRisk,
    MediumRisk,
    HighRisk,
    VeryHighRisk,
}

impl HealthRisk {
    /// Returns the canonical risk label.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthRisk::MalnutritionRisk => "Malnutrition risk",
            HealthRisk::LowRisk => "Low risk",
            HealthRisk::EnhancedRisk => "Enhanced risk",
            HealthRisk::MediumRisk => "Medium risk",
            HealthRisk::HighRisk => "High risk",
            HealthRisk::VeryHighRisk => "Very high risk",
        }
    }
}

impl fmt::Display for HealthRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("Other".parse::<Gender>().is_err());
        assert!("male".parse::<Gender>().is_err());
        assert!(" Male ".parse::<Gender>().is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Overweight".parse::<BmiCategory>().unwrap(),
            BmiCategory::Overweight
        );
        assert_eq!(
            "moderately obese".parse::<BmiCategory>().unwrap(),
            BmiCategory::ModeratelyObese
        );
        assert!("Obese".parse::<BmiCategory>().is_err());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), Some(BmiCategory::Underweight));
        assert_eq!(BmiCategory::from_bmi(18.5), Some(BmiCategory::NormalWeight));
        assert_eq!(BmiCategory::from_bmi(24.9), Some(BmiCategory::NormalWeight));
        assert_eq!(BmiCategory::from_bmi(25.0), Some(BmiCategory::Overweight));
        assert_eq!(
            BmiCategory::from_bmi(40.0),
            Some(BmiCategory::VerySeverelyObese)
        );
        assert_eq!(
            BmiCategory::from_bmi(120.0),
            Some(BmiCategory::VerySeverelyObese)
        );
    }

    #[test]
    fn test_band_gap_is_uncovered() {
        // The open interval (18.4, 18.5) belongs to no band.
        assert_eq!(BmiCategory::from_bmi(18.45), None);
        assert_eq!(BmiCategory::from_bmi(18.421_875), None);
    }

    #[test]
    fn test_non_finite_is_uncovered() {
        assert_eq!(BmiCategory::from_bmi(f32::NAN), None);
        // Infinite BMI is >= 40.0; only NaN escapes the bands entirely.
        assert_eq!(
            BmiCategory::from_bmi(f32::INFINITY),
            Some(BmiCategory::VerySeverelyObese)
        );
    }

    #[test]
    fn test_health_risk_mapping() {
        assert_eq!(
            BmiCategory::Underweight.health_risk(),
            HealthRisk::MalnutritionRisk
        );
        assert_eq!(BmiCategory::NormalWeight.health_risk(), HealthRisk::LowRisk);
        assert_eq!(
            BmiCategory::Overweight.health_risk(),
            HealthRisk::EnhancedRisk
        );
        assert_eq!(
            BmiCategory::ModeratelyObese.health_risk(),
            HealthRisk::MediumRisk
        );
        assert_eq!(BmiCategory::SeverelyObese.health_risk(), HealthRisk::HighRisk);
        assert_eq!(
            BmiCategory::VerySeverelyObese.health_risk(),
            HealthRisk::VeryHighRisk
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(HealthRisk::MalnutritionRisk.to_string(), "Malnutrition risk");
    }
}
