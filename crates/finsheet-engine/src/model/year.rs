//! Fiscal-year columns.
//!
//! The statement has a fixed set of year columns that take part in totals and
//! variance. They are modelled as a closed enum so cell access never goes
//! through an unchecked string key; freely added columns live elsewhere
//! (see [`Row::extra`](super::Row::extra)).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An aggregable year column.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum FiscalYear {
    #[serde(rename = "2021")]
    Y2021,
    #[serde(rename = "2022")]
    Y2022,
    #[serde(rename = "2024")]
    Y2024,
}

impl FiscalYear {
    /// All year columns in display order.
    pub const ALL: [FiscalYear; 3] = [FiscalYear::Y2021, FiscalYear::Y2022, FiscalYear::Y2024];

    /// Years summed into the total revenue row.
    pub const REVENUE_TOTALED: &'static [FiscalYear] = &FiscalYear::ALL;

    /// Years summed into the total expense row. 2024 is intentionally absent.
    pub const EXPENSE_TOTALED: &'static [FiscalYear] = &[FiscalYear::Y2021, FiscalYear::Y2022];

    /// Field key used by column definitions and snapshots.
    pub fn key(self) -> &'static str {
        match self {
            FiscalYear::Y2021 => "2021",
            FiscalYear::Y2022 => "2022",
            FiscalYear::Y2024 => "2024",
        }
    }

    /// Position in [`FiscalYear::ALL`].
    pub fn index(self) -> usize {
        match self {
            FiscalYear::Y2021 => 0,
            FiscalYear::Y2022 => 1,
            FiscalYear::Y2024 => 2,
        }
    }

    pub fn from_key(key: &str) -> Option<FiscalYear> {
        FiscalYear::ALL.into_iter().find(|year| year.key() == key.trim())
    }
}

impl std::str::FromStr for FiscalYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown fiscal year: {}", s))
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One text cell per [`FiscalYear`]. Empty string means "no value".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearCells([String; 3]);

impl YearCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, year: FiscalYear) -> &str {
        &self.0[year.index()]
    }

    pub fn get_mut(&mut self, year: FiscalYear) -> &mut String {
        &mut self.0[year.index()]
    }

    pub fn set(&mut self, year: FiscalYear, value: impl Into<String>) {
        self.0[year.index()] = value.into();
    }

    /// Iterate cells in column order.
    pub fn iter(&self) -> impl Iterator<Item = (FiscalYear, &str)> {
        FiscalYear::ALL
            .into_iter()
            .map(move |year| (year, self.get(year)))
    }
}

impl<S: Into<String>> FromIterator<(FiscalYear, S)> for YearCells {
    fn from_iter<I: IntoIterator<Item = (FiscalYear, S)>>(iter: I) -> Self {
        let mut cells = YearCells::new();
        for (year, value) in iter {
            cells.set(year, value);
        }
        cells
    }
}
