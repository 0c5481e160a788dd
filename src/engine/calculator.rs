//! Compound interest calculation
//!
//! finalAmount = P * (1 + r/k)^(k*t), with k the unit's frequency. The
//! breakdown evaluates the same closed form at every whole period rather than
//! accumulating row to row.

use super::{CalculationInput, CalculationResult, EngineConfig, PeriodRecord};
use crate::compounding::CompoundingUnit;
use crate::error::Result;
use log::{debug, warn};

/// Compound interest engine
#[derive(Debug, Clone, Default)]
pub struct InterestEngine {
    config: EngineConfig,
}

impl InterestEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Compute final amount, total interest and the per-period breakdown
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult> {
        input.validate()?;

        let principal = input.principal;
        let frequency = input.unit.frequency() as f64;
        let growth = 1.0 + input.decimal_rate() / frequency;

        // A zero principal stays zero even when the growth factor overflows
        let balance_after = |periods: f64| {
            if principal == 0.0 {
                principal
            } else {
                principal * growth.powf(frequency * periods)
            }
        };

        let final_amount = balance_after(input.elapsed_periods);
        let total_interest = final_amount - principal;

        // Negative or sub-unit elapsed time yields no whole periods
        let whole_periods = if input.elapsed_periods >= 1.0 {
            input.elapsed_periods.floor() as u64
        } else {
            0
        };
        let emitted = whole_periods.min(self.config.breakdown_limit());
        let truncated = emitted < whole_periods;
        if truncated {
            warn!(
                "Breakdown truncated to {} of {} {} periods",
                emitted, whole_periods, input.unit
            );
        }

        debug!(
            "Computing {} periods at frequency {} ({}), principal {}, rate {}%",
            whole_periods, frequency, input.unit, principal, input.annual_rate_percent
        );

        let mut periods = Vec::new();
        let mut previous_balance = principal;
        for i in 1..=emitted {
            let balance = balance_after(i as f64);
            periods.push(PeriodRecord {
                period_index: i,
                balance,
                interest_for_period: balance - previous_balance,
            });
            previous_balance = balance;
        }

        Ok(CalculationResult {
            principal,
            unit: input.unit,
            final_amount,
            total_interest,
            periods,
            truncated,
        })
    }
}

/// Compute with the default engine configuration
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    elapsed_periods: f64,
    unit: CompoundingUnit,
) -> Result<CalculationResult> {
    let input = CalculationInput::new(principal, annual_rate_percent, elapsed_periods, unit)?;
    InterestEngine::default().compute(&input)
}
