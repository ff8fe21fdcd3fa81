//! Display helpers shared by the terminal and web front-ends.

use crate::engine::Assessment;

/// BMI at which the progress gauge is full.
pub const GAUGE_MAX_BMI: f64 = 40.0;

/// BMI with two decimal places, e.g. `22.86`.
pub fn format_bmi(bmi: f64) -> String {
    format!("{:.2}", bmi)
}

/// One-line summary, e.g. `Your BMI is: 22.86 (Normal weight)`.
pub fn result_line(assessment: &Assessment) -> String {
    format!(
        "Your BMI is: {} ({})",
        format_bmi(assessment.bmi),
        assessment.classification.label()
    )
}

/// Gauge fill in `[0, 1]`. Display clamp only; the BMI itself is unbounded.
pub fn gauge_fraction(bmi: f64) -> f64 {
    (bmi / GAUGE_MAX_BMI).clamp(0.0, 1.0)
}

/// Round to two decimals for storage in history tables.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assess;
    use approx::assert_relative_eq;

    #[test]
    fn test_format_bmi() {
        assert_eq!(format_bmi(22.857142857142858), "22.86");
        assert_eq!(format_bmi(37.03703703703704), "37.04");
        assert_eq!(format_bmi(25.0), "25.00");
    }

    #[test]
    fn test_result_line() {
        let a = assess(45.0, 1.70).unwrap();
        assert_eq!(result_line(&a), "Your BMI is: 15.57 (Low weight)");
    }

    #[test]
    fn test_gauge_fraction() {
        assert_relative_eq!(gauge_fraction(20.0), 0.5);
        assert_relative_eq!(gauge_fraction(40.0), 1.0);
        assert_relative_eq!(gauge_fraction(55.0), 1.0);
    }

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(22.857142857142858), 22.86);
        assert_relative_eq!(round2(27.755102040816325), 27.76);
    }
}
