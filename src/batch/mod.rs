//! Batch calculation over a CSV file of scenarios

mod loader;
mod runner;

pub use loader::{load_scenarios, load_scenarios_from_path, Scenario};
pub use runner::{run_batch, write_batch_csv, BatchOutcome};
