//! Rendering of calculation results: text summary, CSV table and JSON
//!
//! All monetary values are rounded to cents here, once, on the way out.

use crate::compounding::{round_cents, CompoundingUnit};
use crate::engine::CalculationResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One breakdown row, rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub period: u64,
    pub balance: f64,
    pub interest: f64,
}

/// Rounded view of a result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub unit: CompoundingUnit,
    pub final_amount: f64,
    pub total_interest: f64,
    pub truncated: bool,
    pub periods: Vec<SummaryRow>,
}

impl From<&CalculationResult> for Summary {
    fn from(result: &CalculationResult) -> Self {
        Self {
            unit: result.unit,
            final_amount: round_cents(result.final_amount),
            total_interest: round_cents(result.total_interest),
            truncated: result.truncated,
            periods: result
                .periods
                .iter()
                .map(|p| SummaryRow {
                    period: p.period_index,
                    balance: round_cents(p.balance),
                    interest: round_cents(p.interest_for_period),
                })
                .collect(),
        }
    }
}

/// Plain-text summary followed by the breakdown table
pub fn render_text(result: &CalculationResult) -> String {
    let mut out = String::from("Total Result\n");
    out.push_str(&format!("  Final Amount: ${:.2}\n", result.final_amount));
    out.push_str(&format!("  Total Interest Earned: ${:.2}\n", result.total_interest));

    if result.periods.is_empty() {
        return out;
    }

    out.push_str("\nDetailed Calculations\n");
    out.push_str(&format!(
        "{:<8} {:>16} {:>16}\n",
        result.period_label(),
        "Balance",
        "Interest Earned"
    ));
    for row in &result.periods {
        out.push_str(&format!(
            "{:<8} {:>16} {:>16}\n",
            row.period_index,
            format!("${:.2}", row.balance),
            format!("${:.2}", row.interest_for_period),
        ));
    }
    if result.truncated {
        out.push_str(&format!("(breakdown truncated after {} rows)\n", result.periods.len()));
    }
    out
}

/// Breakdown table as CSV with a unit-labelled period column
pub fn write_csv<W: Write>(writer: W, result: &CalculationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([result.period_label(), "Balance", "Interest Earned"])?;
    for row in &result.periods {
        wtr.write_record(&[
            row.period_index.to_string(),
            format!("{:.2}", row.balance),
            format!("{:.2}", row.interest_for_period),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Rounded summary as pretty-printed JSON
pub fn write_json<W: Write>(mut writer: W, result: &CalculationResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &Summary::from(result))?;
    writeln!(writer)?;
    Ok(())
}
