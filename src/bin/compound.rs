//! Compute compound interest for a single principal, rate and time span
//!
//! Prints the summary and per-period breakdown as text, CSV or JSON

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use compound_interest::{report, CalculatorForm, EngineConfig, FormInput, InterestEngine};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "compound", version, about = "Compound interest calculator")]
struct Cli {
    /// Principal amount
    #[arg(short, long, allow_hyphen_values = true)]
    principal: String,

    /// Annual interest rate in percent
    #[arg(short, long, allow_hyphen_values = true)]
    rate: String,

    /// Elapsed time, counted in the chosen unit
    #[arg(short, long, allow_hyphen_values = true)]
    time: String,

    /// Compounding and time unit: Day, Month or Year
    #[arg(short, long, default_value = "Day")]
    unit: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// JSON file with engine parameters
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = InterestEngine::new(config);

    let mut form = CalculatorForm::with_input(FormInput::new(cli.principal, cli.rate, cli.time, cli.unit));
    let result = form.submit(&engine).context("calculation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => write!(out, "{}", report::render_text(result))?,
        OutputFormat::Csv => report::write_csv(&mut out, result)?,
        OutputFormat::Json => report::write_json(&mut out, result)?,
    }
    out.flush()?;
    Ok(())
}
