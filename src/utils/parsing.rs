//! Decimal Input Parsing
//!
//! Reads user-typed numbers that may use either `.` or `,` as the decimal
//! separator ("1.75" and "1,75" are the same height).

use crate::engine::{assess, Assessment};
use crate::error::{BmiError, InvalidInput};

/// Parse one form field.
///
/// Empty, non-numeric and non-finite text ("inf", "NaN") is `InvalidInput`.
/// Zero and negative numbers parse fine; the engine rejects them.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    let normalized = raw.trim().replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInput {
            field,
            raw: raw.to_string(),
        }),
    }
}

/// Parse both fields and run the engine.
pub fn parse_measurement(weight_raw: &str, height_raw: &str) -> Result<Assessment, BmiError> {
    let weight_kg = parse_decimal("weight", weight_raw)?;
    let height_m = parse_decimal("height", height_raw)?;
    Ok(assess(weight_kg, height_m)?)
}
