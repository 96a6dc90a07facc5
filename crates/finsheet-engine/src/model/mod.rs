//! Table model: rows, columns and positional insertion.
//!
//! - [`FiscalYear`], [`YearCells`] - typed access to the aggregable year columns
//! - [`Row`], [`RowId`], [`LineKind`] - line items and their classification
//! - [`ColumnDef`], [`ColumnKey`] - the column schema
//! - [`RowIdSource`] - unique id allocation
//! - [`insert_row`], [`append_column`] - the only structural edits

mod column;
mod ids;
mod row;
mod year;

pub use column::{
    CellClass, ColumnDef, ColumnKey, DEFAULT_NEW_COLUMN_WIDTH, append_column, default_columns,
};
pub use ids::RowIdSource;
pub use row::{LineKind, Row, RowId};
pub use year::{FiscalYear, YearCells};

/// Return `rows` with a fresh, empty row of `kind` inserted immediately
/// before the row with id `anchor`. If no row has that id, the new row is
/// prepended.
pub fn insert_row(rows: &[Row], anchor: RowId, kind: LineKind, ids: &mut RowIdSource) -> Vec<Row> {
    ids.observe(rows);
    let new_row = Row::new(ids.next_id(), format!("New Row {}", rows.len() + 1), kind);

    let insert_at = match rows.iter().position(|row| row.id == anchor) {
        Some(index) => index,
        None => {
            log::debug!("insert anchor {} not found, prepending", anchor);
            0
        }
    };

    let mut updated = Vec::with_capacity(rows.len() + 1);
    updated.extend_from_slice(&rows[..insert_at]);
    updated.push(new_row);
    updated.extend_from_slice(&rows[insert_at..]);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Row> {
        vec![
            Row::header(RowId(1), "Revenue"),
            Row::new(RowId(2), "Sales", LineKind::Revenue),
            Row::others(RowId(3), "Other revenue", LineKind::Revenue),
            Row::total(RowId(4), "Total Revenue", LineKind::TotalRevenue),
        ]
    }

    fn ids_of(rows: &[Row]) -> Vec<u64> {
        rows.iter().map(|row| row.id.0).collect()
    }

    #[test]
    fn test_insert_row_before_anchor() {
        let rows = sample();
        let mut ids = RowIdSource::new();
        let updated = insert_row(&rows, RowId(3), LineKind::Revenue, &mut ids);

        assert_eq!(updated.len(), 5);
        assert_eq!(updated[3].id, RowId(3));
        let new_row = &updated[2];
        assert_eq!(new_row.label, "New Row 5");
        assert_eq!(new_row.kind, LineKind::Revenue);
        assert!(new_row.years.iter().all(|(_, v)| v.is_empty()));
        assert!(new_row.is_editable());

        // Existing rows keep their relative order.
        let mut remaining = ids_of(&updated);
        remaining.remove(2);
        assert_eq!(remaining, ids_of(&rows));
    }

    #[test]
    fn test_insert_row_missing_anchor_prepends() {
        let rows = sample();
        let mut ids = RowIdSource::new();
        let updated = insert_row(&rows, RowId(999), LineKind::Expense, &mut ids);

        assert_eq!(updated.len(), rows.len() + 1);
        assert_eq!(updated[0].kind, LineKind::Expense);
        assert_eq!(&updated[1..], &rows[..]);
    }

    #[test]
    fn test_insert_row_ids_are_unique() {
        let mut rows = sample();
        let mut ids = RowIdSource::new();
        for _ in 0..20 {
            rows = insert_row(&rows, RowId(3), LineKind::Revenue, &mut ids);
        }
        let mut seen = ids_of(&rows);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), rows.len());
    }
}
