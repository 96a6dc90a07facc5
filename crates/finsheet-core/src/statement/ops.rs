use super::Statement;
use finsheet_engine::model::{self, ColumnKey, LineKind, RowId};
use finsheet_engine::recalc;
use std::fmt;

/// A single-cell edit coming from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditEvent {
    pub row_id: RowId,
    pub column: ColumnKey,
    pub value: String,
}

impl EditEvent {
    pub fn new(row_id: RowId, column: ColumnKey, value: impl Into<String>) -> Self {
        EditEvent {
            row_id,
            column,
            value: value.into(),
        }
    }
}

/// Why an edit left the statement unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownRow(RowId),
    UnknownColumn(String),
    ReadOnlyRow(RowId),
    ReadOnlyColumn(String),
    /// Total rows are part of the statement layout and never inserted.
    TotalKind(LineKind),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownRow(id) => write!(f, "no row with id {}", id),
            IgnoreReason::UnknownColumn(key) => write!(f, "no column '{}'", key),
            IgnoreReason::ReadOnlyRow(id) => write!(f, "row {} is not editable", id),
            IgnoreReason::ReadOnlyColumn(key) => write!(f, "column '{}' is not editable", key),
            IgnoreReason::TotalKind(kind) => write!(f, "cannot insert a {} row", kind),
        }
    }
}

/// Result of an edit. Ignored edits are not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Statement {
    /// Apply one cell edit and recompute derived values.
    ///
    /// Edits aimed at unknown rows or columns, total and expand rows, or
    /// derived columns are dropped and reported as [`EditOutcome::Ignored`].
    pub fn edit(&mut self, event: &EditEvent) -> EditOutcome {
        match self.try_edit(event) {
            Ok(()) => EditOutcome::Applied,
            Err(reason) => {
                log::debug!("ignoring edit of {}: {}", event.column, reason);
                EditOutcome::Ignored(reason)
            }
        }
    }

    fn try_edit(&mut self, event: &EditEvent) -> Result<(), IgnoreReason> {
        let field = event.column.field().to_string();
        let column = self
            .columns
            .iter()
            .find(|col| col.key == event.column)
            .ok_or_else(|| IgnoreReason::UnknownColumn(field.clone()))?;
        if !column.editable || column.key.is_derived() {
            return Err(IgnoreReason::ReadOnlyColumn(field));
        }

        let current = self
            .row(event.row_id)
            .ok_or(IgnoreReason::UnknownRow(event.row_id))?;
        if !current.is_editable() {
            return Err(IgnoreReason::ReadOnlyRow(event.row_id));
        }

        let mut edited = current.clone();
        edited.set_cell(&event.column, event.value.clone());

        let updated = recalc::recalculate(&edited, &self.rows, self.variance_pair)
            .ok_or(IgnoreReason::UnknownRow(event.row_id))?;
        self.rows = updated;
        self.modified = true;
        Ok(())
    }

    /// Insert an empty row of `kind` immediately before `anchor`, or at the
    /// top when `anchor` is not in the statement. Returns the new row's id.
    ///
    /// Total kinds are refused and leave the statement unchanged.
    pub fn add_row(&mut self, anchor: RowId, kind: LineKind) -> Result<RowId, IgnoreReason> {
        if kind.is_total() {
            log::debug!("refusing to insert a {} row before {}", kind, anchor);
            return Err(IgnoreReason::TotalKind(kind));
        }
        let updated = model::insert_row(&self.rows, anchor, kind, &mut self.ids);
        let new_id = updated
            .iter()
            .map(|row| row.id)
            .find(|id| self.row(*id).is_none())
            .unwrap_or(anchor);
        self.rows = updated;
        self.modified = true;
        Ok(new_id)
    }

    /// The expand affordance: insert a row of the anchor's own kind.
    pub fn expand(&mut self, anchor: RowId) -> Result<RowId, IgnoreReason> {
        let kind = self
            .row(anchor)
            .map(|row| row.kind)
            .unwrap_or(LineKind::Other);
        self.add_row(anchor, kind)
    }

    /// Append a new editable text column. Returns its key.
    pub fn add_column(&mut self) -> ColumnKey {
        self.columns = model::append_column(&self.columns, self.new_column_width);
        self.modified = true;
        self.columns
            .last()
            .map(|col| col.key.clone())
            .unwrap_or(ColumnKey::Label)
    }
}
