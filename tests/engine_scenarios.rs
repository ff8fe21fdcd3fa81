//! End-to-end scenarios: weight/height in, band and advice out.

use approx::assert_relative_eq;
use bmi_calculator::engine::BANDS;
use bmi_calculator::utils::formatting::format_bmi;
use bmi_calculator::{assess, classify_bmi, compute_bmi, recommend, Classification, Severity};

// (weight_kg, height_m, displayed BMI, band, severity)
const SCENARIOS: &[(f64, f64, &str, Classification, Severity)] = &[
    (70.0, 1.75, "22.86", Classification::Normal, Severity::Success),
    (120.0, 1.80, "37.04", Classification::Obese, Severity::Error),
    (45.0, 1.70, "15.57", Classification::LowWeight, Severity::Info),
    (85.0, 1.75, "27.76", Classification::Overweight, Severity::Warning),
    (120.0, 1.70, "41.52", Classification::Obese, Severity::Error),
    (40.0, 1.80, "12.35", Classification::LowWeight, Severity::Info),
];

#[test]
fn test_scenarios() {
    for &(weight, height, display, class, severity) in SCENARIOS {
        let a = assess(weight, height).unwrap();
        assert_eq!(format_bmi(a.bmi), display, "{} kg / {} m", weight, height);
        assert_eq!(a.classification, class, "{} kg / {} m", weight, height);
        assert_eq!(a.recommendation.severity, severity, "{} kg / {} m", weight, height);
    }
}

#[test]
fn test_scenario_advisories() {
    assert!(assess(70.0, 1.75).unwrap().recommendation.text.contains("ideal weight"));
    assert!(assess(120.0, 1.80).unwrap().recommendation.text.contains("consult a doctor"));
    assert!(assess(45.0, 1.70).unwrap().recommendation.text.contains("nutritionist"));
    assert!(assess(85.0, 1.75).unwrap().recommendation.text.contains("physical activity"));
}

#[test]
fn test_zero_weight_produces_no_result() {
    let err = compute_bmi(0.0, 1.75).unwrap_err();
    assert_eq!(err.weight_kg, 0.0);
    assert!(assess(0.0, 1.75).is_err());
}

#[test]
fn test_assess_agrees_with_separate_calls() {
    for &(weight, height, ..) in SCENARIOS {
        let bmi = compute_bmi(weight, height).unwrap();
        let a = assess(weight, height).unwrap();
        assert_relative_eq!(a.bmi, bmi);
        assert_eq!(a.classification, classify_bmi(bmi));
        assert_eq!(a.recommendation, recommend(bmi));
    }
}

#[test]
fn test_every_band_reachable() {
    for band in BANDS.iter() {
        let probe = band.lower_bound + 0.1;
        assert_eq!(classify_bmi(probe), band.classification);
        assert_eq!(recommend(probe), band.recommendation);
    }
}
