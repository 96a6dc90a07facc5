//! Canonical display form for numeric year cells.

use super::numeric::{format_grouped, parse_numeric};
use crate::model::{FiscalYear, Row};

/// Return `rows` with every numeric year cell rewritten in grouped form.
///
/// Empty cells and cells without a numeric prefix are left untouched.
/// Applying this twice gives the same result as applying it once.
pub fn normalize_numeric_cells(rows: &[Row]) -> Vec<Row> {
    rows.iter()
        .cloned()
        .map(|mut row| {
            for year in FiscalYear::ALL {
                let cell = row.years.get_mut(year);
                if cell.trim().is_empty() {
                    continue;
                }
                if let Some(value) = parse_numeric(cell) {
                    *cell = format_grouped(value);
                }
            }
            row
        })
        .collect()
}
