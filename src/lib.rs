//! BMI Calculator
//!
//! Body-mass index computation, classification and recommendations, with
//! the shared plumbing used by the terminal and web front-ends.
//!
//! Module layout:
//! - `engine/`: pure BMI computation and the band table
//! - `error`: typed errors for bad measurements and unparseable input
//! - `utils/`: decimal parsing and display formatting
//! - `history`: in-memory session history of saved calculations
//! - `config`: server configuration from the environment
//! - `api_server`: Axum JSON API (feature `api`)

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use engine::{
    assess, classify_bmi, compute_bmi, recommend, Assessment, Classification, Measurement,
    Recommendation, Severity,
};
pub use error::{BmiError, InvalidInput, InvalidMeasurement};
pub use history::{HistoryEntry, SessionHistory};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
