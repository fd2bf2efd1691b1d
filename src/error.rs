//! Error types for the caltarget application.

use thiserror::Error;

/// Errors raised when user-provided input cannot be turned into a valid
/// profile and goal.
#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("invalid age: {value}")]
    InvalidAge { value: String },

    #[error("invalid height: {value}")]
    InvalidHeight { value: String },

    #[error("invalid weight: {value}")]
    InvalidWeight { value: String },

    #[error("invalid target weight: {value}")]
    InvalidTargetWeight { value: String },

    #[error("invalid target date (expected YYYY-MM-DD): {value}")]
    InvalidTargetDate { value: String },

    #[error("unknown unit: {value}")]
    UnknownUnit { value: String },

    #[error("{field} must be positive: {value}")]
    NonPositive { field: &'static str, value: f64 },
}
