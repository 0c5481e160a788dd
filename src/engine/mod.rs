//! Interest engine for single-principal compound interest calculations

mod input;
mod calculator;
mod result;

pub use input::{CalculationInput, EngineConfig};
pub use calculator::{compute, InterestEngine};
pub use result::{CalculationResult, PeriodRecord};

// ============================================================================
// Breakdown Guard
// ============================================================================
// The breakdown loop runs once per whole elapsed unit. Rows past this count
// are dropped and the result is flagged as truncated; the final amount and
// total interest are always computed in full. A configured cap is clamped to
// the ceiling so a config file cannot lift the guard.

/// Default cap on breakdown rows
pub const DEFAULT_MAX_BREAKDOWN_PERIODS: u64 = 100_000;

/// Hard ceiling for any configured cap
pub const MAX_BREAKDOWN_PERIODS_CEILING: u64 = 1_000_000;
