//! Value types produced by the BMI engine.
//!
//! All types are immutable values; none outlives the call that produced it
//! unless a front-end decides to keep it (see `history`).

use serde::Serialize;

use crate::error::InvalidMeasurement;

/// Weight and height pair, both strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self, InvalidMeasurement> {
        if is_positive(weight_kg) && is_positive(height_m) {
            Ok(Self { weight_kg, height_m })
        } else {
            Err(InvalidMeasurement { weight_kg, height_m })
        }
    }

    /// `weight_kg / height_m²`, unrounded.
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

/// NaN and infinities are rejected along with zero and negatives.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    LowWeight,
    Normal,
    Overweight,
    Obese,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::LowWeight => "Low weight",
            Classification::Normal => "Normal weight",
            Classification::Overweight => "Overweight",
            Classification::Obese => "Obesity",
        }
    }

    /// Coloured circle shown next to the label.
    pub fn indicator(&self) -> &'static str {
        match self {
            Classification::LowWeight => "🔵",
            Classification::Normal => "🟢",
            Classification::Overweight => "🟡",
            Classification::Obese => "🔴",
        }
    }

    /// Pastel card/bar background (web dashboard palette).
    pub fn background_color(&self) -> &'static str {
        match self {
            Classification::LowWeight => "#bbdefb",
            Classification::Normal => "#c8e6c9",
            Classification::Overweight => "#fff9c4",
            Classification::Obese => "#ffcdd2",
        }
    }

    /// Saturated result-text colour (desktop form palette).
    pub fn accent_color(&self) -> &'static str {
        match self {
            Classification::LowWeight => "#00b4d8",
            Classification::Normal => "#43aa8b",
            Classification::Overweight => "#f9c74f",
            Classification::Obese => "#f3722c",
        }
    }
}

/// Tone of a recommendation, mirrors the alert styles of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Advisory text paired with a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub text: &'static str,
}

/// Full engine output for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub bmi: f64,
    pub classification: Classification,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_measurement_rejects_non_positive() {
        assert!(Measurement::new(0.0, 1.75).is_err());
        assert!(Measurement::new(70.0, 0.0).is_err());
        assert!(Measurement::new(-70.0, 1.75).is_err());
        assert!(Measurement::new(70.0, -1.75).is_err());
        assert!(Measurement::new(-70.0, -1.75).is_err());
    }

    #[test]
    fn test_measurement_rejects_non_finite() {
        assert!(Measurement::new(f64::NAN, 1.75).is_err());
        assert!(Measurement::new(70.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_measurement_bmi() {
        let m = Measurement::new(70.0, 1.75).unwrap();
        assert_relative_eq!(m.bmi(), 22.857142857142858, epsilon = 1e-12);
    }

    #[test]
    fn test_classification_serializes_snake_case() {
        let json = serde_json::to_string(&Classification::LowWeight).unwrap();
        assert_eq!(json, "\"low_weight\"");
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
