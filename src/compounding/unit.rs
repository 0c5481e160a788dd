//! Compounding unit and its frequency per year

use crate::error::InterestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of both the compounding interval and the elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingUnit {
    /// Daily compounding (365 per year)
    #[default]
    Day,
    /// Monthly compounding (12 per year)
    Month,
    /// Annual compounding (1 per year)
    Year,
}

impl CompoundingUnit {
    pub const ALL: [CompoundingUnit; 3] = [Self::Day, Self::Month, Self::Year];

    /// Number of compounding periods per year
    #[must_use]
    pub fn frequency(&self) -> u32 {
        match self {
            CompoundingUnit::Day => 365,
            CompoundingUnit::Month => 12,
            CompoundingUnit::Year => 1,
        }
    }

    /// Header label for the breakdown table
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CompoundingUnit::Day => "Day",
            CompoundingUnit::Month => "Month",
            CompoundingUnit::Year => "Year",
        }
    }
}

impl fmt::Display for CompoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompoundingUnit {
    type Err = InterestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InterestError::InvalidUnit { value: s.to_string() })
    }
}
