//! Column schema.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::year::FiscalYear;

/// Width given to columns added at runtime unless configured otherwise.
pub const DEFAULT_NEW_COLUMN_WIDTH: u32 = 150;

/// Identifies which cell of a row a column shows.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum ColumnKey {
    Label,
    Year(FiscalYear),
    Variance,
    VariancePercentage,
    /// Column added at runtime. Plain text, never aggregated.
    Extra(String),
}

impl ColumnKey {
    /// Resolve a field key. Never fails: unknown keys are treated as dynamic columns.
    pub fn parse(field: &str) -> ColumnKey {
        let field = field.trim();
        match field {
            "label" => ColumnKey::Label,
            "variance" => ColumnKey::Variance,
            "variancePercentage" => ColumnKey::VariancePercentage,
            _ => match FiscalYear::from_key(field) {
                Some(year) => ColumnKey::Year(year),
                None => ColumnKey::Extra(field.to_string()),
            },
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ColumnKey::Label => "label",
            ColumnKey::Year(year) => year.key(),
            ColumnKey::Variance => "variance",
            ColumnKey::VariancePercentage => "variancePercentage",
            ColumnKey::Extra(field) => field,
        }
    }

    /// Derived columns are written by the recalculation engine only.
    pub fn is_derived(&self) -> bool {
        matches!(self, ColumnKey::Variance | ColumnKey::VariancePercentage)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl Serialize for ColumnKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.field())
    }
}

/// Presentation class of a column's cells.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    GrayColor,
    WhiteColor,
}

impl CellClass {
    /// Columns alternate shading by position.
    pub fn for_index(index: usize) -> CellClass {
        if index % 2 == 0 {
            CellClass::GrayColor
        } else {
            CellClass::WhiteColor
        }
    }
}

/// A column definition as handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(rename = "field")]
    pub key: ColumnKey,
    #[serde(rename = "headerName")]
    pub header: String,
    pub width: u32,
    pub editable: bool,
    #[serde(rename = "cellClassName")]
    pub class: CellClass,
}

impl ColumnDef {
    pub fn new(key: ColumnKey, header: impl Into<String>, width: u32, editable: bool) -> Self {
        ColumnDef {
            key,
            header: header.into(),
            width,
            editable,
            class: CellClass::WhiteColor,
        }
    }

    fn with_class(mut self, class: CellClass) -> Self {
        self.class = class;
        self
    }
}

/// Columns every statement starts with: label, the fiscal years, and the
/// two derived variance columns.
pub fn default_columns() -> Vec<ColumnDef> {
    let mut columns = vec![ColumnDef::new(ColumnKey::Label, "million", 250, true)];
    for year in FiscalYear::ALL {
        columns.push(ColumnDef::new(ColumnKey::Year(year), year.key(), 120, true));
    }
    columns.push(ColumnDef::new(ColumnKey::Variance, "Variance", 120, false));
    columns.push(ColumnDef::new(ColumnKey::VariancePercentage, "Variance %", 120, false));
    columns
        .into_iter()
        .enumerate()
        .map(|(i, col)| col.with_class(CellClass::for_index(i)))
        .collect()
}

/// Return `columns` with one new editable text column appended.
///
/// The new column is numbered by the current column count; if that field key
/// is already taken the number is bumped until it is free.
pub fn append_column(columns: &[ColumnDef], width: u32) -> Vec<ColumnDef> {
    let mut index = columns.len();
    while columns
        .iter()
        .any(|col| col.key.field() == format!("newColumn{}", index))
    {
        index += 1;
    }

    let new_column = ColumnDef::new(
        ColumnKey::Extra(format!("newColumn{}", index)),
        format!("New Column {}", index),
        width,
        true,
    )
    .with_class(CellClass::for_index(index));

    let mut updated = columns.to_vec();
    updated.push(new_column);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_keys() {
        assert_eq!(ColumnKey::parse("label"), ColumnKey::Label);
        assert_eq!(ColumnKey::parse("2022"), ColumnKey::Year(FiscalYear::Y2022));
        assert_eq!(ColumnKey::parse("variancePercentage"), ColumnKey::VariancePercentage);
        assert_eq!(
            ColumnKey::parse("newColumn6"),
            ColumnKey::Extra("newColumn6".to_string())
        );
        assert!(ColumnKey::Variance.is_derived());
        assert!(!ColumnKey::Year(FiscalYear::Y2021).is_derived());
    }

    #[test]
    fn test_default_columns_layout() {
        let columns = default_columns();
        let fields: Vec<&str> = columns.iter().map(|c| c.key.field()).collect();
        assert_eq!(
            fields,
            vec!["label", "2021", "2022", "2024", "variance", "variancePercentage"]
        );
        assert!(columns.iter().filter(|c| c.key.is_derived()).all(|c| !c.editable));
    }

    #[test]
    fn test_append_column_numbers_by_count() {
        let columns = default_columns();
        let updated = append_column(&columns, DEFAULT_NEW_COLUMN_WIDTH);
        assert_eq!(updated.len(), columns.len() + 1);
        assert_eq!(&updated[..columns.len()], &columns[..]);

        let added = updated.last().unwrap();
        assert_eq!(added.key, ColumnKey::Extra("newColumn6".into()));
        assert_eq!(added.header, "New Column 6");
        assert_eq!(added.width, 150);
        assert!(added.editable);
        assert_eq!(added.class, CellClass::GrayColor);

        let again = append_column(&updated, DEFAULT_NEW_COLUMN_WIDTH);
        assert_eq!(again.last().unwrap().class, CellClass::WhiteColor);
    }

    #[test]
    fn test_append_column_skips_taken_key() {
        let mut columns = default_columns();
        columns.push(ColumnDef::new(
            ColumnKey::Extra("newColumn7".into()),
            "Imported",
            100,
            true,
        ));
        let updated = append_column(&columns, 90);
        assert_eq!(updated.last().unwrap().key.field(), "newColumn8");
        assert_eq!(updated.last().unwrap().width, 90);
    }
}
