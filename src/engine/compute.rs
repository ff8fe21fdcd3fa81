//! BMI computation.

use super::classify::band_for;
use super::types::{Assessment, Measurement};
use crate::error::InvalidMeasurement;

/// Compute `weight_kg / height_m²`.
///
/// Fails when either input is zero, negative or not finite, and when the
/// quotient itself overflows (e.g. a height so small its square underflows
/// to zero). The result is not rounded; rounding belongs to whoever
/// displays it.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Result<f64, InvalidMeasurement> {
    let bmi = Measurement::new(weight_kg, height_m)?.bmi();

    if bmi.is_finite() {
        Ok(bmi)
    } else {
        Err(InvalidMeasurement { weight_kg, height_m })
    }
}

/// Compute, classify and recommend in one pass over the band table.
pub fn assess(weight_kg: f64, height_m: f64) -> Result<Assessment, InvalidMeasurement> {
    let bmi = compute_bmi(weight_kg, height_m)?;
    let band = band_for(bmi);

    Ok(Assessment {
        bmi,
        classification: band.classification,
        recommendation: band.recommendation,
    })
}
