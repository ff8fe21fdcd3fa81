//! BMI engine
//!
//! Pure functions over `f64` scalars and a fixed band table:
//! - `compute`: weight/height to BMI, with input validation
//! - `classify`: band table, classification and recommendation lookup
//! - `types`: value types shared with the front-ends
//!
//! Nothing here holds state; every function is safe to call from any thread.

pub mod classify;
pub mod compute;
pub mod types;

pub use classify::{
    band_for, classify_bmi, recommend, Band, BANDS, NORMAL_MIN_BMI, OBESE_MIN_BMI,
    OVERWEIGHT_MIN_BMI,
};
pub use compute::{assess, compute_bmi};
pub use types::*;
