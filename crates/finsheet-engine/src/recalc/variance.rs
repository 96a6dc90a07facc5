//! Year-over-year variance on revenue lines.

use serde::{Deserialize, Serialize};

use super::numeric::{format_fixed, numeric_or_zero};
use crate::model::{FiscalYear, LineKind, Row};

/// The two year columns variance compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariancePair {
    pub earlier: FiscalYear,
    pub later: FiscalYear,
}

impl Default for VariancePair {
    /// Earliest against latest aggregable year.
    fn default() -> Self {
        VariancePair {
            earlier: FiscalYear::Y2021,
            later: FiscalYear::Y2024,
        }
    }
}

/// `later - earlier` to two decimals, or empty when that rounds to zero.
pub fn variance(earlier: f64, later: f64) -> String {
    let formatted = format_fixed(later - earlier);
    if formatted == "0.00" {
        String::new()
    } else {
        formatted
    }
}

/// Variance relative to the earlier value, as `"12.34%"`.
///
/// Empty when the earlier value is zero or the percentage rounds to zero. The
/// percentage is taken from the rounded variance, as displayed.
pub fn variance_percentage(earlier: f64, later: f64) -> String {
    if earlier == 0.0 {
        return String::new();
    }
    let shown = numeric_or_zero(&variance(earlier, later));
    let formatted = format_fixed(shown / earlier * 100.0);
    if formatted == "0.00" {
        String::new()
    } else {
        format!("{}%", formatted)
    }
}

/// Recompute the derived fields of one row in place.
///
/// Revenue rows get both fields; every other kind has them cleared.
pub(crate) fn refresh_row(row: &mut Row, pair: VariancePair) {
    if row.kind == LineKind::Revenue {
        let earlier = numeric_or_zero(row.years.get(pair.earlier));
        let later = numeric_or_zero(row.years.get(pair.later));
        row.variance = Some(variance(earlier, later));
        row.variance_percentage = Some(variance_percentage(earlier, later));
    } else {
        row.variance = None;
        row.variance_percentage = None;
    }
}

/// Return `rows` with the derived fields of every revenue row recomputed.
pub fn refresh_variances(rows: &[Row], pair: VariancePair) -> Vec<Row> {
    rows.iter()
        .cloned()
        .map(|mut row| {
            refresh_row(&mut row, pair);
            row
        })
        .collect()
}
