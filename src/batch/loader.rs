//! Scenario loading from CSV
//!
//! Expected headers: id,principal,rate,time,unit. Values are kept as raw text
//! so each row goes through the same parsing as the calculator form.

use crate::error::Result;
use crate::form::FormInput;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One CSV row: an identifier plus raw form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: String,
    pub input: FormInput,
}

#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    id: String,
    principal: String,
    rate: String,
    time: String,
    unit: String,
}

impl From<ScenarioRecord> for Scenario {
    fn from(rec: ScenarioRecord) -> Self {
        Self {
            id: rec.id,
            input: FormInput::new(rec.principal, rec.rate, rec.time, rec.unit),
        }
    }
}

/// Read scenarios from any CSV source
pub fn load_scenarios<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize::<ScenarioRecord>() {
        scenarios.push(record?.into());
    }
    Ok(scenarios)
}

/// Read scenarios from a CSV file
pub fn load_scenarios_from_path(path: impl AsRef<Path>) -> Result<Vec<Scenario>> {
    let file = File::open(path)?;
    load_scenarios(file)
}
