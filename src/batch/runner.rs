//! Parallel batch runner

use super::Scenario;
use crate::compounding::round_cents;
use crate::engine::{CalculationResult, InterestEngine};
use crate::error::Result;
use log::{info, warn};
use rayon::prelude::*;
use std::io::Write;
use std::time::Instant;

/// Result of one scenario; a failed row carries its error message
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub id: String,
    pub result: std::result::Result<CalculationResult, String>,
}

/// Compute every scenario in parallel, preserving input order
pub fn run_batch(engine: &InterestEngine, scenarios: &[Scenario]) -> Vec<BatchOutcome> {
    let start = Instant::now();

    let outcomes: Vec<BatchOutcome> = scenarios
        .par_iter()
        .map(|scenario| {
            let result = scenario
                .input
                .parse()
                .and_then(|input| engine.compute(&input))
                .map_err(|e| {
                    warn!("Scenario {} failed: {}", scenario.id, e);
                    e.to_string()
                });
            BatchOutcome { id: scenario.id.clone(), result }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        "Computed {} scenarios ({} failed) in {:?}",
        outcomes.len(),
        failed,
        start.elapsed()
    );
    outcomes
}

/// One summary row per scenario
pub fn write_batch_csv<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "unit", "periods", "final_amount", "total_interest", "error"])?;

    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => wtr.write_record(&[
                outcome.id.clone(),
                result.unit.to_string(),
                result.periods.len().to_string(),
                format!("{:.2}", round_cents(result.final_amount)),
                format!("{:.2}", round_cents(result.total_interest)),
                String::new(),
            ])?,
            Err(message) => wtr.write_record(&[
                outcome.id.as_str(),
                "",
                "",
                "",
                "",
                message.as_str(),
            ])?,
        }
    }
    wtr.flush()?;
    Ok(())
}
