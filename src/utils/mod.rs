//! Utility modules shared by the front-ends
//!
//! - Parsing: user-typed decimals (`.` or `,` separator)
//! - Formatting: two-decimal display, summary line, gauge fill

pub mod formatting;
pub mod parsing;

// Re-export commonly used functions
pub use formatting::{format_bmi, gauge_fraction, result_line};
pub use parsing::{parse_decimal, parse_measurement};
