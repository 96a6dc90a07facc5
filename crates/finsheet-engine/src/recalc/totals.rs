//! Aggregate rows.

use super::numeric::{format_fixed, numeric_or_zero};
use crate::model::{FiscalYear, LineKind, Row};

/// Total kinds and the year columns each one sums.
const AGGREGATES: [(LineKind, &[FiscalYear]); 2] = [
    (LineKind::TotalRevenue, FiscalYear::REVENUE_TOTALED),
    (LineKind::TotalExpense, FiscalYear::EXPENSE_TOTALED),
];

/// Sum one year column over every row of `kind`.
pub fn column_sum(rows: &[Row], kind: LineKind, year: FiscalYear) -> f64 {
    rows.iter()
        .filter(|row| row.kind == kind)
        .map(|row| numeric_or_zero(row.years.get(year)))
        .sum()
}

/// Return `rows` with the total revenue and total expense rows rewritten.
///
/// Only the first `is_total` row of each total kind is written. Plain rows
/// tagged with a total kind are never targets. A missing total row skips that
/// aggregate. Columns a total does not cover are left as they are.
pub fn recompute_totals(rows: &[Row]) -> Vec<Row> {
    let mut updated = rows.to_vec();

    for (total_kind, years) in AGGREGATES {
        let Some(member_kind) = total_kind.summed_kind() else {
            continue;
        };
        let Some(index) = updated
            .iter()
            .position(|row| row.is_total && row.kind == total_kind)
        else {
            log::debug!("no {} row, skipping aggregate", total_kind);
            continue;
        };

        for &year in years {
            let sum = column_sum(rows, member_kind, year);
            updated[index].years.set(year, format_fixed(sum));
        }
        log::trace!("recomputed {} row {}", total_kind, updated[index].id);
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowId;

    fn line(id: u64, kind: LineKind, values: [&str; 3]) -> Row {
        let mut row = Row::new(RowId(id), format!("Line {}", id), kind);
        for (year, value) in FiscalYear::ALL.into_iter().zip(values) {
            row.years.set(year, value);
        }
        row
    }

    fn statement() -> Vec<Row> {
        vec![
            line(1, LineKind::Revenue, ["100.00", "1,000", "7"]),
            line(2, LineKind::Revenue, ["200.00", "abc", ""]),
            Row::total(RowId(3), "Total Revenue", LineKind::TotalRevenue),
            line(4, LineKind::Expense, ["50", "25.5", "999"]),
            Row::total(RowId(5), "Total Expenses", LineKind::TotalExpense),
        ]
    }

    #[test]
    fn test_revenue_total_sums_every_year() {
        let totals = recompute_totals(&statement());
        let total = &totals[2];
        assert_eq!(total.years.get(FiscalYear::Y2021), "300.00");
        assert_eq!(total.years.get(FiscalYear::Y2022), "1000.00");
        assert_eq!(total.years.get(FiscalYear::Y2024), "7.00");
    }

    #[test]
    fn test_expense_total_skips_latest_year() {
        let totals = recompute_totals(&statement());
        let total = &totals[4];
        assert_eq!(total.years.get(FiscalYear::Y2021), "50.00");
        assert_eq!(total.years.get(FiscalYear::Y2022), "25.50");
        assert_eq!(total.years.get(FiscalYear::Y2024), "");
    }

    #[test]
    fn test_empty_expense_column_totals_to_zero() {
        let rows = vec![
            line(1, LineKind::Expense, ["", "", ""]),
            Row::total(RowId(2), "Total Expenses", LineKind::TotalExpense),
        ];
        let totals = recompute_totals(&rows);
        assert_eq!(totals[1].years.get(FiscalYear::Y2022), "0.00");
    }

    #[test]
    fn test_missing_total_row_is_noop() {
        let rows = vec![line(1, LineKind::Revenue, ["1", "2", "3"])];
        assert_eq!(recompute_totals(&rows), rows);
    }

    #[test]
    fn test_only_first_total_row_is_written() {
        let mut rows = statement();
        rows.push(Row::total(RowId(6), "Duplicate", LineKind::TotalRevenue));
        let totals = recompute_totals(&rows);
        assert_eq!(totals[2].years.get(FiscalYear::Y2021), "300.00");
        assert_eq!(totals[5].years.get(FiscalYear::Y2021), "");
    }

    #[test]
    fn test_plain_row_with_total_kind_is_not_a_target() {
        let mut rows = statement();
        rows.insert(1, line(9, LineKind::TotalRevenue, ["5", "5", "5"]));
        let totals = recompute_totals(&rows);
        assert_eq!(totals[1].years.get(FiscalYear::Y2021), "5");
        assert_eq!(totals[3].years.get(FiscalYear::Y2021), "300.00");
    }

    #[test]
    fn test_recompute_totals_is_idempotent() {
        let once = recompute_totals(&statement());
        let twice = recompute_totals(&once);
        assert_eq!(once, twice);
    }
}
