use finsheet_engine::model::{
    ColumnDef, DEFAULT_NEW_COLUMN_WIDTH, Row, RowId, RowIdSource, default_columns,
};
use finsheet_engine::recalc::{self, VariancePair};
use std::collections::HashSet;

use super::seed::{SeedRow, profit_and_loss};
use crate::error::{FinsheetError, Result};

/// UI-agnostic document state for one financial statement.
///
/// `rows` and `columns` are the authoritative snapshot. Every operation
/// computes a new snapshot through the engine and swaps it in whole, so a
/// reader never sees rows that are normalised but not yet totalled.
#[derive(Clone, Debug)]
pub struct Statement {
    /// Line items in display order
    pub rows: Vec<Row>,
    /// Column schema in display order
    pub columns: Vec<ColumnDef>,
    /// Id allocator for inserted rows
    pub ids: RowIdSource,
    /// Which two years variance compares
    pub variance_pair: VariancePair,
    /// Width given to columns added at runtime
    pub new_column_width: u32,
    /// Whether anything changed since construction
    pub modified: bool,
}

impl Statement {
    /// An empty statement with the default columns.
    pub fn new() -> Self {
        Self::from_rows(Vec::new(), default_columns())
    }

    /// The built-in profit and loss statement.
    pub fn seeded() -> Self {
        Self::from_rows(profit_and_loss(), default_columns())
    }

    /// Build a statement from existing rows, bringing derived values up to date.
    pub fn from_rows(rows: Vec<Row>, columns: Vec<ColumnDef>) -> Self {
        let variance_pair = VariancePair::default();
        let rows = recalc::settle(&rows, variance_pair);
        Statement {
            ids: RowIdSource::after(&rows),
            rows,
            columns,
            variance_pair,
            new_column_width: DEFAULT_NEW_COLUMN_WIDTH,
            modified: false,
        }
    }

    /// Build a statement from seed records. Row ids must be unique.
    pub fn from_seed(seed: &[SeedRow]) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in seed {
            if !seen.insert(record.id) {
                return Err(FinsheetError::DuplicateRowId(RowId(record.id)));
            }
        }
        let rows = seed.iter().map(SeedRow::to_row).collect();
        Ok(Self::from_rows(rows, default_columns()))
    }

    /// Switch the variance years and recompute every revenue row.
    pub fn with_variance_pair(mut self, pair: VariancePair) -> Self {
        self.variance_pair = pair;
        self.rows = recalc::settle(&self.rows, pair);
        self
    }

    pub fn with_new_column_width(mut self, width: u32) -> Self {
        self.new_column_width = width;
        self
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}
