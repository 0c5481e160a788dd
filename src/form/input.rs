//! Raw form fields and their parsing into engine input

use crate::compounding::CompoundingUnit;
use crate::engine::CalculationInput;
use crate::error::{InterestError, Result};
use serde::{Deserialize, Serialize};

/// Form fields exactly as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub principal: String,
    pub rate: String,
    pub time: String,
    /// Shared selector for the rate's compounding unit and the time unit
    pub unit: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            principal: String::new(),
            rate: String::new(),
            time: String::new(),
            unit: CompoundingUnit::default().label().to_string(),
        }
    }
}

impl FormInput {
    pub fn new(
        principal: impl Into<String>,
        rate: impl Into<String>,
        time: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            rate: rate.into(),
            time: time.into(),
            unit: unit.into(),
        }
    }

    /// Parse every field, reporting the first one that fails
    pub fn parse(&self) -> Result<CalculationInput> {
        let principal = parse_number("principal", &self.principal)?;
        let rate = parse_number("rate", &self.rate)?;
        let time = parse_number("time", &self.time)?;
        let unit: CompoundingUnit = self.unit.parse()?;
        CalculationInput::new(principal, rate, time, unit)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InterestError::invalid_number(field, raw)),
    }
}
