//! Recalculation engine.
//!
//! Every function takes the current rows by reference and returns a new
//! sequence; nothing here holds state or mutates its input. An edit is
//! processed as [`apply_edit`] then [`normalize_numeric_cells`] then
//! [`recompute_totals`]. [`recalculate`] runs the three in that order.

mod normalize;
mod numeric;
mod totals;
mod variance;

pub use normalize::normalize_numeric_cells;
pub use numeric::{format_fixed, format_grouped, numeric_or_zero, parse_numeric};
pub use totals::{column_sum, recompute_totals};
pub use variance::{VariancePair, refresh_variances, variance, variance_percentage};

use crate::model::Row;

/// Replace the row whose id matches `edited` and refresh its derived fields.
///
/// Returns `None` when no row has that id; callers keep their current rows.
pub fn apply_edit(edited: &Row, rows: &[Row], pair: VariancePair) -> Option<Vec<Row>> {
    let Some(index) = rows.iter().position(|row| row.id == edited.id) else {
        log::debug!("edit target {} not found, ignoring", edited.id);
        return None;
    };

    let mut updated = rows.to_vec();
    let mut row = edited.clone();
    variance::refresh_row(&mut row, pair);
    updated[index] = row;
    Some(updated)
}

/// The full edit pipeline. `None` when the edit target is stale.
pub fn recalculate(edited: &Row, rows: &[Row], pair: VariancePair) -> Option<Vec<Row>> {
    let applied = apply_edit(edited, rows, pair)?;
    let normalized = normalize_numeric_cells(&applied);
    Some(recompute_totals(&normalized))
}

/// Bring freshly loaded rows in line with every derived-value invariant.
pub fn settle(rows: &[Row], pair: VariancePair) -> Vec<Row> {
    let refreshed = refresh_variances(rows, pair);
    let normalized = normalize_numeric_cells(&refreshed);
    recompute_totals(&normalized)
}
