//! Compounding units and monetary rounding

mod unit;
mod rounding;

pub use unit::CompoundingUnit;
pub use rounding::round_cents;
