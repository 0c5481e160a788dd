//! Engine inputs and configuration

use super::{DEFAULT_MAX_BREAKDOWN_PERIODS, MAX_BREAKDOWN_PERIODS_CEILING};
use crate::compounding::CompoundingUnit;
use crate::error::{InterestError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Validated numeric input for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Initial amount before interest accrues
    pub principal: f64,

    /// Annual rate in percent (5.0 = 5%), negative for depreciation
    pub annual_rate_percent: f64,

    /// Elapsed time, counted in `unit`
    pub elapsed_periods: f64,

    /// Compounding interval and time unit
    pub unit: CompoundingUnit,
}

impl CalculationInput {
    /// Build an input, rejecting NaN and infinite values
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        elapsed_periods: f64,
        unit: CompoundingUnit,
    ) -> Result<Self> {
        let input = Self { principal, annual_rate_percent, elapsed_periods, unit };
        input.validate()?;
        Ok(input)
    }

    /// Check that every numeric field is finite
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("principal", self.principal),
            ("rate", self.annual_rate_percent),
            ("time", self.elapsed_periods),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InterestError::invalid_number(field, value));
            }
        }
        Ok(())
    }

    /// Decimal rate (0.05 for 5%)
    pub fn decimal_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0
    }
}

/// Engine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of breakdown rows produced for one calculation
    #[serde(default = "default_max_breakdown_periods")]
    pub max_breakdown_periods: u64,
}

fn default_max_breakdown_periods() -> u64 { DEFAULT_MAX_BREAKDOWN_PERIODS }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_breakdown_periods: DEFAULT_MAX_BREAKDOWN_PERIODS,
        }
    }
}

impl EngineConfig {
    /// Load parameters from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        Ok(config.clamped())
    }

    /// Breakdown row limit, never above the hard ceiling
    pub fn breakdown_limit(&self) -> u64 {
        self.max_breakdown_periods.min(MAX_BREAKDOWN_PERIODS_CEILING)
    }

    fn clamped(mut self) -> Self {
        if self.max_breakdown_periods > MAX_BREAKDOWN_PERIODS_CEILING {
            warn!(
                "max_breakdown_periods {} exceeds ceiling, using {}",
                self.max_breakdown_periods, MAX_BREAKDOWN_PERIODS_CEILING
            );
            self.max_breakdown_periods = MAX_BREAKDOWN_PERIODS_CEILING;
        }
        self
    }
}
