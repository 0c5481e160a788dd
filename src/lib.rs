//! Compound Interest - calculator for a single principal, rate and time span
//!
//! This library provides:
//! - Compounding unit lookup (day, month, year frequencies)
//! - The interest engine: final amount, total interest, per-period breakdown
//! - Form-boundary parsing of raw text input and calculator state
//! - Text, CSV and JSON reports
//! - Parallel batch calculation from CSV scenario files

pub mod error;
pub mod compounding;
pub mod engine;
pub mod form;
pub mod report;
pub mod batch;

// Re-export commonly used types
pub use error::{InterestError, Result};
pub use compounding::CompoundingUnit;
pub use engine::{compute, CalculationInput, CalculationResult, EngineConfig, InterestEngine, PeriodRecord};
pub use form::{CalculatorForm, FormInput};
