//! Line items.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::column::ColumnKey;
use super::year::{FiscalYear, YearCells};

/// Row identifier. Assigned once and never reused within a statement.
#[derive(
    Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RowId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RowId)
            .map_err(|_| format!("Invalid row id: {}", s))
    }
}

/// Classification of a line item. Decides aggregation membership.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum LineKind {
    Revenue,
    Expense,
    TotalRevenue,
    TotalExpense,
    #[default]
    #[serde(other)]
    Other,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Revenue => "Revenue",
            LineKind::Expense => "Expense",
            LineKind::TotalRevenue => "TotalRevenue",
            LineKind::TotalExpense => "TotalExpense",
            LineKind::Other => "Other",
        }
    }

    /// The member kind summed into this total, if this is a total kind.
    pub fn summed_kind(self) -> Option<LineKind> {
        match self {
            LineKind::TotalRevenue => Some(LineKind::Revenue),
            LineKind::TotalExpense => Some(LineKind::Expense),
            _ => None,
        }
    }

    /// Total kinds belong to engine-maintained rows only.
    pub fn is_total(self) -> bool {
        self.summed_kind().is_some()
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LineKind {
    type Err = String;

    /// Case-insensitive. Anything unrecognised is an error rather than `Other`,
    /// so typos in commands surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revenue" => Ok(LineKind::Revenue),
            "expense" => Ok(LineKind::Expense),
            "totalrevenue" => Ok(LineKind::TotalRevenue),
            "totalexpense" => Ok(LineKind::TotalExpense),
            "other" => Ok(LineKind::Other),
            _ => Err(format!("Unknown line type: {}", s)),
        }
    }
}

/// A single line item of the statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub label: String,
    pub years: YearCells,
    /// Cells of columns added at runtime, keyed by field key.
    pub extra: BTreeMap<String, String>,
    pub kind: LineKind,
    pub is_header: bool,
    /// Derived row. Only the recalculation engine writes to it.
    pub is_total: bool,
    /// Carries the add-row affordance.
    pub is_others: bool,
    /// Only ever `Some` on revenue rows.
    pub variance: Option<String>,
    pub variance_percentage: Option<String>,
}

impl Row {
    pub fn new(id: RowId, label: impl Into<String>, kind: LineKind) -> Self {
        Row {
            id,
            label: label.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn header(id: RowId, label: impl Into<String>) -> Self {
        Row {
            is_header: true,
            ..Row::new(id, label, LineKind::Other)
        }
    }

    pub fn total(id: RowId, label: impl Into<String>, kind: LineKind) -> Self {
        Row {
            is_total: true,
            ..Row::new(id, label, kind)
        }
    }

    pub fn others(id: RowId, label: impl Into<String>, kind: LineKind) -> Self {
        Row {
            is_others: true,
            ..Row::new(id, label, kind)
        }
    }

    pub fn with_year(mut self, year: FiscalYear, value: impl Into<String>) -> Self {
        self.years.set(year, value);
        self
    }

    /// Whether the end user may edit cells of this row.
    pub fn is_editable(&self) -> bool {
        !(self.is_total || self.is_others)
    }

    /// Read a cell by column key. `None` for dynamic keys the row never stored.
    pub fn cell(&self, key: &ColumnKey) -> Option<&str> {
        match key {
            ColumnKey::Label => Some(self.label.as_str()),
            ColumnKey::Year(year) => Some(self.years.get(*year)),
            ColumnKey::Variance => Some(self.variance.as_deref().unwrap_or("")),
            ColumnKey::VariancePercentage => {
                Some(self.variance_percentage.as_deref().unwrap_or(""))
            }
            ColumnKey::Extra(field) => self.extra.get(field).map(String::as_str),
        }
    }

    /// Write a cell by column key.
    pub fn set_cell(&mut self, key: &ColumnKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            ColumnKey::Label => self.label = value,
            ColumnKey::Year(year) => self.years.set(*year, value),
            ColumnKey::Variance => self.variance = Some(value),
            ColumnKey::VariancePercentage => self.variance_percentage = Some(value),
            ColumnKey::Extra(field) => {
                self.extra.insert(field.clone(), value);
            }
        }
    }
}

/// Rows serialise as flat records: `{"id":1,"label":"..","2021":"..",..,"type":"Revenue"}`.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("label", &self.label)?;
        for (year, value) in self.years.iter() {
            map.serialize_entry(year.key(), value)?;
        }
        for (field, value) in &self.extra {
            map.serialize_entry(field, value)?;
        }
        map.serialize_entry("type", &self.kind)?;
        map.serialize_entry("isHeader", &self.is_header)?;
        map.serialize_entry("isTotal", &self.is_total)?;
        map.serialize_entry("isOthers", &self.is_others)?;
        if let Some(variance) = &self.variance {
            map.serialize_entry("variance", variance)?;
        }
        if let Some(pct) = &self.variance_percentage {
            map.serialize_entry("variancePercentage", pct)?;
        }
        map.end()
    }
}
