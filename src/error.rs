//! Error types
//!
//! Two failure kinds exist:
//! - `InvalidMeasurement`: the engine was handed a weight or height that is not
//!   strictly positive (or not finite).
//! - `InvalidInput`: a front-end could not read user text as a number. Never
//!   produced by the engine itself.

use thiserror::Error;

/// Message shown to users when a field cannot be read as a number.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Use valid numbers.";

/// Message shown to users when weight or height is not greater than zero.
pub const INVALID_MEASUREMENT_MESSAGE: &str = "Weight and height must be greater than zero.";

/// Weight or height outside the engine's domain (`<= 0`, NaN or infinite).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Weight and height must be greater than zero (weight_kg={weight_kg}, height_m={height_m})")]
pub struct InvalidMeasurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// Text that could not be parsed as a decimal number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid input for {field}: {raw:?} is not a valid number")]
pub struct InvalidInput {
    pub field: &'static str,
    pub raw: String,
}

/// Umbrella error for front-ends that parse text and then call the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error(transparent)]
    InvalidMeasurement(#[from] InvalidMeasurement),
}

impl BmiError {
    /// Stable machine-readable tag (used in JSON error bodies).
    pub fn kind(&self) -> &'static str {
        match self {
            BmiError::InvalidInput(_) => "invalid_input",
            BmiError::InvalidMeasurement(_) => "invalid_measurement",
        }
    }

    /// Literal message for display next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            BmiError::InvalidInput(_) => INVALID_INPUT_MESSAGE,
            BmiError::InvalidMeasurement(_) => INVALID_MEASUREMENT_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_messages() {
        let input: BmiError = InvalidInput { field: "weight", raw: "abc".to_string() }.into();
        assert_eq!(input.kind(), "invalid_input");
        assert_eq!(input.user_message(), INVALID_INPUT_MESSAGE);

        let measurement: BmiError = InvalidMeasurement { weight_kg: 0.0, height_m: 1.75 }.into();
        assert_eq!(measurement.kind(), "invalid_measurement");
        assert_eq!(measurement.user_message(), INVALID_MEASUREMENT_MESSAGE);
    }

    #[test]
    fn test_display_names_field() {
        let err = InvalidInput { field: "height", raw: "1.7m".to_string() };
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("1.7m"));
    }
}
