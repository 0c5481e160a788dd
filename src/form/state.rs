//! Mutable calculator state owned by the presentation layer

use super::FormInput;
use crate::compounding::CompoundingUnit;
use crate::engine::{CalculationResult, InterestEngine};
use crate::error::Result;
use log::{debug, info};

/// Inputs plus the most recent successful result
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    pub input: FormInput,
    result: Option<CalculationResult>,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: FormInput) -> Self {
        Self { input, result: None }
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Parse the current inputs and compute.
    ///
    /// On error the inputs and any earlier result are left untouched so the
    /// user can correct a field and submit again.
    pub fn submit(&mut self, engine: &InterestEngine) -> Result<&CalculationResult> {
        let input = self.input.parse().inspect_err(|e| debug!("Form rejected: {e}"))?;
        let result = engine.compute(&input)?;
        info!(
            "Final amount {:.2}, total interest {:.2} over {} rows",
            result.final_amount,
            result.total_interest,
            result.periods.len()
        );
        Ok(self.result.insert(result))
    }

    /// Discard inputs and result, returning to the initial empty form
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Period column label for the selected unit ("Period" when the selection is invalid)
    pub fn period_label(&self) -> &'static str {
        self.input
            .unit
            .parse::<CompoundingUnit>()
            .map(|unit| unit.label())
            .unwrap_or("Period")
    }
}
