//! Error types for interest calculations and their reports

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, InterestError>;

#[derive(Debug, Error)]
pub enum InterestError {
    /// A principal, rate or time value is missing, unparseable, or not finite
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Unit text is not one of Day, Month, Year
    #[error("invalid compounding unit: {value:?} (expected Day, Month or Year)")]
    InvalidUnit { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InterestError {
    pub(crate) fn invalid_number(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidNumber { field, value: value.to_string() }
    }
}
