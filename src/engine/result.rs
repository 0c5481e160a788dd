//! Calculation output structures

use crate::compounding::CompoundingUnit;
use serde::{Deserialize, Serialize};

/// Balance and interest after one whole compounding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based period index
    pub period_index: u64,
    /// Balance after `period_index` periods
    pub balance: f64,
    /// Balance delta from the previous period
    pub interest_for_period: f64,
}

/// Full-precision result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub principal: f64,
    pub unit: CompoundingUnit,
    pub final_amount: f64,
    /// Always `final_amount - principal`
    pub total_interest: f64,
    /// Whole periods 1..=floor(elapsed), ascending
    pub periods: Vec<PeriodRecord>,
    /// Set when the breakdown was cut short by the engine's period cap
    pub truncated: bool,
}

impl CalculationResult {
    /// Table header label for the period column
    pub fn period_label(&self) -> &'static str {
        self.unit.label()
    }

    /// Sum of per-period interest over the emitted rows
    pub fn breakdown_interest(&self) -> f64 {
        self.periods.iter().map(|p| p.interest_for_period).sum()
    }
}
