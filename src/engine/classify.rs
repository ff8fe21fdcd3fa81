//! Band table and classification.
//!
//! Classification and recommendation read the same ordered table, so the
//! boundaries cannot drift apart.

use serde::Serialize;

use super::types::*;

// ============================================================================
// Thresholds
// ============================================================================

/// Lower bound (inclusive) of the Normal band.
pub const NORMAL_MIN_BMI: f64 = 18.5;

/// Lower bound (inclusive) of the Overweight band.
pub const OVERWEIGHT_MIN_BMI: f64 = 25.0;

/// Lower bound (inclusive) of the Obese band.
pub const OBESE_MIN_BMI: f64 = 30.0;

// ============================================================================
// Band Table
// ============================================================================

/// One row of the band table: every BMI `>= lower_bound` and below the next
/// row's bound belongs to this band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub lower_bound: f64,
    pub classification: Classification,
    pub recommendation: Recommendation,
}

/// Ordered by ascending `lower_bound`. The first row covers everything below
/// `NORMAL_MIN_BMI`.
pub static BANDS: [Band; 4] = [
    Band {
        lower_bound: 0.0,
        classification: Classification::LowWeight,
        recommendation: Recommendation {
            severity: Severity::Info,
            text: "Consider consulting a nutritionist to gain weight in a healthy way.",
        },
    },
    Band {
        lower_bound: NORMAL_MIN_BMI,
        classification: Classification::Normal,
        recommendation: Recommendation {
            severity: Severity::Success,
            text: "Congratulations! You are at your ideal weight. \
                   Keep a balanced diet and exercise regularly.",
        },
    },
    Band {
        lower_bound: OVERWEIGHT_MIN_BMI,
        classification: Classification::Overweight,
        recommendation: Recommendation {
            severity: Severity::Warning,
            text: "Consider reducing your intake of high-calorie foods \
                   and increasing physical activity.",
        },
    },
    Band {
        lower_bound: OBESE_MIN_BMI,
        classification: Classification::Obese,
        recommendation: Recommendation {
            severity: Severity::Error,
            text: "We recommend you consult a doctor or nutritionist \
                   for a healthy weight-loss plan.",
        },
    },
];

/// Find the band for a BMI value.
///
/// Scans from the highest bound down and returns the first band whose lower
/// bound is `<= bmi`. Anything that matches no bound (values below 18.5, and
/// NaN) lands in the first band.
pub fn band_for(bmi: f64) -> &'static Band {
    BANDS[1..]
        .iter()
        .rev()
        .find(|band| bmi >= band.lower_bound)
        .unwrap_or(&BANDS[0])
}

/// Classify a BMI value into one of the four bands.
///
/// - `bmi < 18.5`: LowWeight
/// - `18.5 <= bmi < 25`: Normal
/// - `25 <= bmi < 30`: Overweight
/// - `bmi >= 30`: Obese
pub fn classify_bmi(bmi: f64) -> Classification {
    band_for(bmi).classification
}

/// Advisory for a BMI value, over the same bands as `classify_bmi`.
pub fn recommend(bmi: f64) -> Recommendation {
    band_for(bmi).recommendation
}
