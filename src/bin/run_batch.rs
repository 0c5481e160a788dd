//! Run compound interest calculations for every scenario in a CSV file
//!
//! Input columns: id,principal,rate,time,unit
//! Output columns: id,unit,periods,final_amount,total_interest,error

use anyhow::{Context, Result};
use clap::Parser;
use compound_interest::batch::{load_scenarios_from_path, run_batch, write_batch_csv};
use compound_interest::{EngineConfig, InterestEngine};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", version, about = "Batch compound interest calculations")]
struct Cli {
    /// Scenario CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with engine parameters
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = InterestEngine::new(config);

    let scenarios = load_scenarios_from_path(&cli.input)
        .with_context(|| format!("failed to load scenarios from {}", cli.input.display()))?;
    log::info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let outcomes = run_batch(&engine, &scenarios);

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    write_batch_csv(&mut writer, &outcomes)?;
    writer.flush()?;

    if let Some(path) = &cli.output {
        eprintln!("Output written to {}", path.display());
    }
    log::info!("Total time: {:?}", start.elapsed());
    Ok(())
}
